//! Port interface for local persistence
//!
//! Implementations live in `mailtriage-infra` (file-backed and in-memory).

use mailtriage_domain::Result;

/// Synchronous byte store addressed by string keys.
///
/// Each call is independent; callers perform their own read-modify-write.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> Result<()>;
}
