//! Route definitions for the registry service surface

use axum::{
    routing::{delete, get, put},
    Router,
};

use depot_artifacts::ArtifactStore;
use depot_health::HealthReporter;

use super::handlers;

/// Application state for the registry service surface
#[derive(Clone)]
pub struct RegistryState {
    pub store: ArtifactStore,
    pub reporter: HealthReporter,
    /// Declared roadmap tracks, purely informational
    pub planned_tracks: Vec<String>,
}

/// Create the registry service routes
pub fn routes() -> Router<RegistryState> {
    Router::new()
        .route("/tracks", get(handlers::tracks))
        .route("/authenticate", put(handlers::authenticate))
        // The smoke tooling this grew out of hit reset with either verb.
        .route("/reset", delete(handlers::reset).post(handlers::reset))
}
