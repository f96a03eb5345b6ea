//! Cache-aside read path.
//!
//! - **Hit**: `has` then `get`, deserialize and return.
//! - **Miss**: run the loader, serialize the result into the cache, return.
//!
//! Cache failures and undecodable entries degrade to a miss; they are logged
//! and never surface to the caller. Two concurrent misses on the same key
//! both load and both `set` the same value, which is harmless.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use storefront_core::cache::{deserialize, serialize, KeyCache};

/// Serves `key` from the cache, or loads and caches it.
pub async fn read_through<T, E, F, Fut>(cache: &dyn KeyCache, key: &str, load: F) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(value) = lookup(cache, key).await {
        tracing::trace!(key, "Cache hit");
        return Ok(value);
    }

    tracing::trace!(key, "Cache miss");
    let value = load().await?;
    populate(cache, key, &value).await;
    Ok(value)
}

/// Like [`read_through`], but a loader returning `None` leaves the cache
/// untouched so a later create is not masked by a cached absence.
pub async fn read_through_optional<T, E, F, Fut>(
    cache: &dyn KeyCache,
    key: &str,
    load: F,
) -> Result<Option<T>, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    if let Some(value) = lookup(cache, key).await {
        tracing::trace!(key, "Cache hit");
        return Ok(Some(value));
    }

    tracing::trace!(key, "Cache miss");
    let value = load().await?;
    if let Some(ref v) = value {
        populate(cache, key, v).await;
    }
    Ok(value)
}

async fn lookup<T: DeserializeOwned>(cache: &dyn KeyCache, key: &str) -> Option<T> {
    match cache.has(key).await {
        Ok(true) => {}
        Ok(false) => return None,
        Err(err) => {
            tracing::warn!(key, error = %err, "Cache lookup failed");
            return None;
        }
    }

    // An invalidation may land between `has` and `get`; that reads as a miss.
    let bytes = match cache.get(key).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, error = %err, "Cache read failed");
            return None;
        }
    };

    match deserialize(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "Cache entry deserialization failed");
            None
        }
    }
}

async fn populate<T: Serialize>(cache: &dyn KeyCache, key: &str, value: &T) {
    let bytes = match serialize(value) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to serialize cache entry");
            return;
        }
    };

    if let Err(err) = cache.set(key, &bytes).await {
        tracing::warn!(key, error = %err, "Failed to populate cache");
    }
}
