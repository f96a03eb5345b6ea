//! Cache-aside decorators over the storage traits.

mod order;
mod product;

pub use order::CachedOrderRepository;
pub use product::CachedProductRepository;
