//! Identifier allocation for artifact records

use uuid::Uuid;

/// Allocates opaque, process-unique artifact identifiers.
///
/// Ids are UUIDv4 hex (122 random bits), so no two calls return the same
/// value for any realistic process lifetime, concurrent or not. Allocation
/// never fails. The store still asserts uniqueness on insert; a collision
/// there is an unrecoverable invariant violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdAllocator;

impl IdAllocator {
    pub fn new_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
