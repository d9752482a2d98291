//! Route definitions for Artifacts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::artifacts;
use super::middleware::ArtifactsState;

/// Create all Artifacts domain API routes
pub fn routes() -> Router<ArtifactsState> {
    Router::new()
        .route(
            "/artifacts",
            post(artifacts::create_artifact).get(artifacts::list_artifacts),
        )
        .route("/artifacts/{id}", get(artifacts::get_artifact))
        .route(
            "/artifacts/by-name/{name}",
            get(artifacts::list_artifacts_by_name),
        )
        .route(
            "/artifacts/by-regex",
            post(artifacts::search_artifacts_by_regex),
        )
}
