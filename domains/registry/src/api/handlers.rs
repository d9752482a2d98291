//! Registry service handlers: tracks, authenticate stub, reset

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use depot_common::{Error, RegistryToken, Result};

use super::routes::RegistryState;

#[derive(Debug, Serialize)]
pub struct TracksResponse {
    #[serde(rename = "plannedTracks")]
    pub planned_tracks: Vec<String>,
}

/// Declared roadmap tracks. Purely informational, no side effects.
pub async fn tracks(State(state): State<RegistryState>) -> Json<TracksResponse> {
    Json(TracksResponse {
        planned_tracks: state.planned_tracks.clone(),
    })
}

/// Token minting is permanently unsupported by design. Always 501,
/// regardless of credential content — the body is deliberately not
/// parsed, so even malformed credentials get the same stable signal.
pub async fn authenticate() -> Result<Json<Value>> {
    tracing::warn!("authenticate requested; capability is permanently unimplemented");
    Err(Error::not_implemented("authenticate"))
}

/// Clear the whole registry: artifacts and health observations.
///
/// Requires a registry token (presence only). The artifact clear is
/// atomic; it either fully applies or, if the request never reaches the
/// store, not at all.
pub async fn reset(
    RegistryToken(_token): RegistryToken,
    State(state): State<RegistryState>,
) -> Json<Value> {
    let removed = state.store.reset();
    state.reporter.clear();

    Json(json!({
        "status": "reset",
        "removedCount": removed,
    }))
}
