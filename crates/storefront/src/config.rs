use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Products per storefront search page (default: 8)
    pub product_per_page: usize,
    /// Size of the cached latest-products listing (default: 5)
    pub latest_products_limit: usize,
    /// Orders shown as latest transactions on the dashboard (default: 4)
    pub latest_transactions_limit: usize,
    /// Base URL the asset host serves uploads from
    /// (default: "https://assets.storefront.local")
    pub asset_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRODUCT_PER_PAGE` - Search page size (default: 8)
    /// - `LATEST_PRODUCTS_LIMIT` - Latest products listing size (default: 5)
    /// - `LATEST_TRANSACTIONS_LIMIT` - Dashboard latest transactions (default: 4)
    /// - `ASSET_BASE_URL` - Asset host base URL (default: "https://assets.storefront.local")
    ///
    /// Unparseable or zero sizes fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            product_per_page: positive_var("PRODUCT_PER_PAGE").unwrap_or(8),
            latest_products_limit: positive_var("LATEST_PRODUCTS_LIMIT").unwrap_or(5),
            latest_transactions_limit: positive_var("LATEST_TRANSACTIONS_LIMIT").unwrap_or(4),
            asset_base_url: env::var("ASSET_BASE_URL")
                .unwrap_or_else(|_| "https://assets.storefront.local".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn positive_var(name: &str) -> Option<usize> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|n| *n > 0)
}
