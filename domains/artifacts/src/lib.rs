//! Artifacts domain: content-addressed registry of models, datasets, and code

pub mod api;
pub mod domain;
pub mod id;
pub mod store;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Artifact, ArtifactKind, ArtifactMetadata};
pub use id::IdAllocator;
pub use store::ArtifactStore;

// Re-export API types
pub use api::routes;
pub use api::ArtifactsState;
