//! Registry service surface: tracks listing, authenticate stub, reset
//!
//! The service itself is stateless across calls; every piece of state it
//! touches lives in the artifact store or the health reporter.

pub mod api;

pub use api::routes;
pub use api::RegistryState;
