//! Health domain: rolling-window component liveness reporting

pub mod api;
pub mod reporter;

pub use api::routes;
pub use api::HealthState;
pub use reporter::{
    ComponentHealth, ComponentStatus, HealthReport, HealthReporter, OverallStatus,
};
