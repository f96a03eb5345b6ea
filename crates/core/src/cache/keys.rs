//! The cache key vocabulary shared by read and write paths.
//!
//! Read paths populate these keys, [`InvalidationDescriptor`](super::InvalidationDescriptor)
//! computes which of them a write must delete. Adding a new cached view means
//! adding its key here and wiring it into the descriptor.

use std::fmt::Display;

/// Newest products, as shown on the storefront landing page.
pub const LATEST_PRODUCTS_KEY: &str = "latest-products";

/// Distinct product categories.
pub const CATEGORIES_KEY: &str = "categories";

/// Every product, as listed in the admin panel.
pub const ALL_PRODUCTS_KEY: &str = "all-products";

/// Every order, as listed in the admin panel.
pub const ALL_ORDERS_KEY: &str = "all-orders";

/// Dashboard summary statistics.
pub const ADMIN_STATS_KEY: &str = "admin-stats";

/// Dashboard pie chart data.
pub const ADMIN_PIE_CHARTS_KEY: &str = "admin-pie-charts";

/// Dashboard bar chart data.
pub const ADMIN_BAR_CHARTS_KEY: &str = "admin-bar-charts";

/// Dashboard line chart data.
pub const ADMIN_LINE_CHARTS_KEY: &str = "admin-line-charts";

/// Rendered in place of an id the caller did not supply.
pub const UNDEFINED_ID: &str = "undefined";

/// The fixed keys dropped by every product write.
pub const PRODUCT_LISTING_KEYS: [&str; 3] = [LATEST_PRODUCTS_KEY, CATEGORIES_KEY, ALL_PRODUCTS_KEY];

/// Every dashboard key.
pub const ADMIN_KEYS: [&str; 4] = [
    ADMIN_STATS_KEY,
    ADMIN_PIE_CHARTS_KEY,
    ADMIN_BAR_CHARTS_KEY,
    ADMIN_LINE_CHARTS_KEY,
];

/// Returns the cache key for a single product.
pub fn product_key(product_id: impl Display) -> String {
    format!("product-{}", product_id)
}

/// Returns the cache key for a user's order history.
///
/// A missing user id renders as `my-orders-undefined`, which never matches a
/// populated key.
pub fn my_orders_key(user_id: Option<&str>) -> String {
    format!("my-orders-{}", user_id.unwrap_or(UNDEFINED_ID))
}

/// Returns the cache key for a single order.
pub fn order_key(order_id: Option<impl Display>) -> String {
    match order_id {
        Some(id) => format!("order-{}", id),
        None => format!("order-{}", UNDEFINED_ID),
    }
}
