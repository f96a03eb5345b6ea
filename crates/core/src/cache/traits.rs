use async_trait::async_trait;

use super::Result;

/// Process-wide key/value store for serialized query results.
///
/// There is no TTL and no eviction: an entry lives until a write invalidates
/// it or the process restarts. Correctness therefore rests entirely on every
/// write enumerating the keys it affects.
#[async_trait]
pub trait KeyCache: Send + Sync {
    /// Returns true if a live entry exists for `key`.
    async fn has(&self, key: &str) -> Result<bool>;

    /// Gets the stored payload for `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Inserts or replaces the entry for `key`.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes every listed key. Missing keys are ignored.
    async fn delete(&self, keys: &[String]) -> Result<()>;
}
