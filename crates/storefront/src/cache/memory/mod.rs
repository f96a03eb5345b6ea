//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-memory key cache for single-instance
//! deployments. Multi-instance deployments need a shared backend and a
//! broadcast of every invalidation, which this backend does not attempt.

mod cache;

pub use cache::MemoryCache;
