//! Storefront admin backend.
//!
//! Read paths go through a shared [`KeyCache`](storefront_core::cache::KeyCache);
//! every write persists first and then invalidates the affected key groups.

pub mod assets;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod invalidation;
pub mod mock_data;
pub mod services;
pub mod state;
pub mod stats;
pub mod stock;
pub mod storage;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use invalidation::InvalidationRouter;
pub use state::AppState;
pub use stats::StatsAggregator;
pub use stock::StockAdjuster;
