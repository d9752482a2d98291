//! API layer for the Health domain

pub mod handlers;
pub mod routes;

pub use routes::{routes, HealthState};
