//! In-memory artifact store
//!
//! `ArtifactStore` is the only owner of `RegistryState`; nothing else holds
//! a reference to the underlying maps. All mutations (create, reset) take
//! the write lock, readers share the read lock, and the lock is never held
//! across an await point or any external call, so readers observe either
//! none or all of a mutation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use regex::Regex;

use depot_common::{Error, Result};

use crate::domain::entities::{Artifact, ArtifactKind, ArtifactMetadata};
use crate::id::IdAllocator;

/// Process-wide registry state: id -> artifact plus insertion order.
///
/// Created empty at service start, cleared only by `reset`, dropped at
/// shutdown. No persistence.
#[derive(Debug, Default)]
struct RegistryState {
    by_id: HashMap<String, Artifact>,
    order: Vec<String>,
}

/// Handle to the shared artifact store. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ArtifactStore {
    state: Arc<RwLock<RegistryState>>,
    ids: IdAllocator,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new artifact and return the stored record.
    ///
    /// Validation runs before the write lock is taken: a failed create
    /// never mutates registry state.
    pub fn create(
        &self,
        kind: ArtifactKind,
        name: &str,
        version: &str,
        content: &str,
    ) -> Result<Artifact> {
        let artifact = Artifact::new(self.ids.new_id(), kind, name, version, content)?;

        let mut state = self.write_lock();
        let prev = state.by_id.insert(artifact.id.clone(), artifact.clone());
        // 122 random bits make this unreachable; if it ever fires the
        // registry's core uniqueness invariant is gone and we stop.
        assert!(prev.is_none(), "duplicate artifact id {}", artifact.id);
        state.order.push(artifact.id.clone());
        drop(state);

        tracing::debug!(id = %artifact.id, kind = %artifact.kind, "artifact created");
        Ok(artifact)
    }

    /// Fetch an artifact by id
    pub fn get(&self, id: &str) -> Result<Artifact> {
        self.read_lock()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Artifact '{id}' not found")))
    }

    /// All artifacts in insertion order
    pub fn list_all(&self) -> Vec<Artifact> {
        let state = self.read_lock();
        state
            .order
            .iter()
            .filter_map(|id| state.by_id.get(id).cloned())
            .collect()
    }

    /// A page of artifacts in insertion order
    pub fn list_page(&self, offset: usize, limit: usize) -> Vec<Artifact> {
        let state = self.read_lock();
        state
            .order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| state.by_id.get(id).cloned())
            .collect()
    }

    /// Metadata for all artifacts with this exact name, in insertion order
    pub fn find_by_name(&self, name: &str) -> Vec<ArtifactMetadata> {
        let state = self.read_lock();
        state
            .order
            .iter()
            .filter_map(|id| state.by_id.get(id))
            .filter(|a| a.name == name)
            .map(Artifact::metadata)
            .collect()
    }

    /// Metadata for all artifacts whose name matches the pattern
    pub fn search_names(&self, pattern: &Regex) -> Vec<ArtifactMetadata> {
        let state = self.read_lock();
        state
            .order
            .iter()
            .filter_map(|id| state.by_id.get(id))
            .filter(|a| pattern.is_match(&a.name))
            .map(Artifact::metadata)
            .collect()
    }

    /// Number of stored artifacts. Doubles as the store's liveness probe.
    pub fn len(&self) -> usize {
        self.read_lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the whole registry, returning how many artifacts were removed.
    ///
    /// Always succeeds and is idempotent: a second consecutive call
    /// returns 0. The clear is a single critical section, so readers see
    /// either the full store or the empty one, never a partial clear.
    pub fn reset(&self) -> usize {
        let mut state = self.write_lock();
        let removed = state.order.len();
        state.by_id.clear();
        state.order.clear();
        drop(state);

        tracing::info!(removed, "registry reset");
        removed
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, RegistryState> {
        // A poisoned lock means a panic mid-mutation; state cannot be
        // trusted past that point.
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
