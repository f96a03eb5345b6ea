//! Cache backend and read-through helpers.
//!
//! This module provides the concrete [`KeyCache`](storefront_core::cache::KeyCache)
//! implementation plus the cache-aside read path shared by every cached view.

pub mod memory;
mod read_through;

pub use memory::MemoryCache;
pub use read_through::{read_through, read_through_optional};
