//! Route definitions for Health domain API

use axum::{routing::get, Router};

use super::handlers;
use crate::HealthReporter;

/// Application state for the Health domain
#[derive(Clone)]
pub struct HealthState {
    pub reporter: HealthReporter,
}

/// Create all Health domain API routes
pub fn routes() -> Router<HealthState> {
    Router::new()
        .route("/health", get(handlers::heartbeat))
        .route("/health/components", get(handlers::components))
}
