//! Health API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use depot_common::{Error, Result};

use super::routes::HealthState;
use crate::reporter::HealthReport;

/// Longest retained window: one day
const MAX_WINDOW_MINUTES: i64 = 1440;

/// Default aggregation window
const DEFAULT_WINDOW_MINUTES: i64 = 60;

#[derive(Debug, Deserialize)]
pub struct ComponentsQuery {
    #[serde(rename = "windowMinutes")]
    pub window_minutes: Option<i64>,
}

/// Lightweight liveness probe. Always 200.
pub async fn heartbeat() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Per-component health over a trailing window.
///
/// `windowMinutes` must be a positive integer no larger than a day;
/// anything else is a validation error.
pub async fn components(
    State(state): State<HealthState>,
    Query(query): Query<ComponentsQuery>,
) -> Result<Json<HealthReport>> {
    let window = query.window_minutes.unwrap_or(DEFAULT_WINDOW_MINUTES);
    if window <= 0 || window > MAX_WINDOW_MINUTES {
        return Err(Error::Validation(format!(
            "windowMinutes must be between 1 and {MAX_WINDOW_MINUTES}, got {window}"
        )));
    }

    Ok(Json(state.reporter.report(window)))
}
