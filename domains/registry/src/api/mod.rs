//! API layer for the registry service surface

pub mod handlers;
pub mod routes;

pub use routes::{routes, RegistryState};
