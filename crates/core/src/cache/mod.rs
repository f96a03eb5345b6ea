mod error;
mod invalidation;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use invalidation::{InvalidationDescriptor, ProductIds};
pub use keys::{
    my_orders_key, order_key, product_key, ADMIN_BAR_CHARTS_KEY, ADMIN_KEYS,
    ADMIN_LINE_CHARTS_KEY, ADMIN_PIE_CHARTS_KEY, ADMIN_STATS_KEY, ALL_ORDERS_KEY,
    ALL_PRODUCTS_KEY, CATEGORIES_KEY, LATEST_PRODUCTS_KEY, PRODUCT_LISTING_KEYS, UNDEFINED_ID,
};
pub use serialization::{deserialize, serialize, SerializationError};
pub use traits::KeyCache;
