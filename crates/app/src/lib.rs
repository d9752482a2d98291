//! Depot application composition root
//!
//! Composes the domain routers into a single application. All registry
//! state is created here once and shared by handle: the artifact store
//! owns the artifact map, the health reporter owns the observation ring,
//! everything else is stateless.

use axum::Router;

use depot_artifacts::{ArtifactStore, ArtifactsState};
use depot_common::Config;
use depot_health::{ComponentStatus, HealthReporter, HealthState};
use depot_registry::RegistryState;

/// Create the main application router with all routes
pub fn create_app(config: &Config) -> Router {
    let store = ArtifactStore::new();
    let reporter = HealthReporter::new();

    // The store's probe is a pure in-memory reachability check: if the
    // lock can be taken and the count read, the store is ok.
    {
        let store = store.clone();
        reporter.register_probe("artifact-store", move || {
            let _ = store.len();
            ComponentStatus::Ok
        });
    }

    let artifacts_state = ArtifactsState {
        store: store.clone(),
        page_size: config.page_size,
    };
    let health_state = HealthState {
        reporter: reporter.clone(),
    };
    let registry_state = RegistryState {
        store,
        reporter,
        planned_tracks: config.planned_tracks.clone(),
    };

    Router::new()
        .route("/", axum::routing::get(|| async { "Depot registry v0.1.0" }))
        .merge(depot_artifacts::routes().with_state(artifacts_state))
        .merge(depot_health::routes().with_state(health_state))
        .merge(depot_registry::routes().with_state(registry_state))
}
