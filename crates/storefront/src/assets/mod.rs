//! Asset host backends.

mod memory;

pub use memory::InMemoryAssetHost;
