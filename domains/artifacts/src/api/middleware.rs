//! Artifacts domain state

use crate::ArtifactStore;

/// Application state for the Artifacts domain
#[derive(Clone)]
pub struct ArtifactsState {
    pub store: ArtifactStore,
    /// Page size used when enumeration requests give no explicit limit
    pub page_size: usize,
}
