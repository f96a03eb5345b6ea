//! Storage backends.

pub mod cached;
mod inmemory;

pub use cached::{CachedOrderRepository, CachedProductRepository};
pub use inmemory::InMemoryRepository;
