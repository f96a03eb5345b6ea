//! Application state.
//!
//! Wires one shared cache, the in-memory store and the services together.
//! The cache is created here and handed to every component that reads or
//! invalidates it.

use std::sync::Arc;

use storefront_core::cache::KeyCache;
use storefront_core::storage::RepositoryError;

use crate::assets::InMemoryAssetHost;
use crate::cache::MemoryCache;
use crate::config::Config;
use crate::dashboard::DashboardService;
use crate::invalidation::InvalidationRouter;
use crate::mock_data::{generate_mock_store, SeedSizes};
use crate::services::{OrderService, ProductService, UserService};
use crate::stock::StockAdjuster;
use crate::storage::{CachedOrderRepository, CachedProductRepository, InMemoryRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn KeyCache>,
    pub users: UserService,
    pub products: ProductService,
    pub orders: OrderService,
    pub dashboard: DashboardService,
    store: Arc<InMemoryRepository>,
}

impl AppState {
    /// Creates an empty in-memory backed state.
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(InMemoryRepository::new());
        let cache: Arc<dyn KeyCache> = Arc::new(MemoryCache::new());
        let assets = Arc::new(InMemoryAssetHost::new(config.asset_base_url.clone()));

        let cached_products = Arc::new(CachedProductRepository::new(store.clone(), cache.clone()));
        let cached_orders = Arc::new(CachedOrderRepository::new(store.clone(), cache.clone()));

        let products = ProductService::new(
            cached_products,
            assets,
            config.latest_products_limit,
            config.product_per_page,
        );

        let orders = OrderService::new(
            cached_orders,
            StockAdjuster::new(store.clone()),
            InvalidationRouter::new(cache.clone()),
        );

        let users = UserService::new(store.clone(), InvalidationRouter::new(cache.clone()));

        let dashboard = DashboardService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            cache.clone(),
            config.latest_transactions_limit,
        );

        Self {
            cache,
            users,
            products,
            orders,
            dashboard,
            store,
        }
    }

    /// Creates a state pre-filled with generated demo data.
    pub async fn with_demo_data(config: &Config, sizes: SeedSizes) -> Result<Self, RepositoryError> {
        let state = Self::new(config);
        generate_mock_store(state.store.as_ref(), sizes).await?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::cache::ADMIN_STATS_KEY;
    use chrono::NaiveDate;
    use storefront_core::catalog::{Gender, NewOrderRequest, NewUserRequest, OrderLineItem};

    fn config() -> Config {
        Config {
            product_per_page: 8,
            latest_products_limit: 5,
            latest_transactions_limit: 4,
            asset_base_url: "https://assets.test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_demo_data_is_visible_through_services() {
        let sizes = SeedSizes {
            products: 6,
            users: 3,
            orders: 5,
        };
        let state = AppState::with_demo_data(&config(), sizes).await.unwrap();

        assert_eq!(state.products.all_products().await.unwrap().len(), 6);
        assert_eq!(state.products.latest_products().await.unwrap().len(), 5);
        assert_eq!(state.orders.all_orders().await.unwrap().len(), 5);
        assert_eq!(state.users.all_users().await.unwrap().len(), 3);
        assert_eq!(state.dashboard.stats().await.unwrap().count.product, 6);
    }

    #[tokio::test]
    async fn test_order_placement_refreshes_dashboard() {
        let state = AppState::new(&config());
        let sizes = SeedSizes {
            products: 2,
            users: 1,
            orders: 0,
        };
        generate_mock_store(state.store.as_ref(), sizes).await.unwrap();
        let before = state.dashboard.stats().await.unwrap();
        assert!(state.cache.has(ADMIN_STATS_KEY).await.unwrap());
        let product = &state.products.all_products().await.unwrap()[0];

        state
            .orders
            .new_order(NewOrderRequest {
                user_id: "customer-1".to_string(),
                items: vec![OrderLineItem::new(product.id, 1)],
                total: 10,
                ..Default::default()
            })
            .await
            .unwrap();

        let after = state.dashboard.stats().await.unwrap();
        assert_eq!(after.count.order, before.count.order + 1);
    }

    #[tokio::test]
    async fn test_user_writes_refresh_dashboard() {
        let state = AppState::new(&config());
        assert_eq!(state.dashboard.stats().await.unwrap().count.user, 0);

        state
            .users
            .new_user(NewUserRequest {
                id: Some("uid-1".to_string()),
                name: Some("Ana".to_string()),
                email: Some("ana@example.com".to_string()),
                photo: Some("https://img.test/ana.png".to_string()),
                gender: Some(Gender::Female),
                dob: NaiveDate::from_ymd_opt(1990, 5, 1),
            })
            .await
            .unwrap();

        assert_eq!(state.dashboard.stats().await.unwrap().count.user, 1);
        let pies = state.dashboard.pie_charts().await.unwrap();
        assert_eq!(pies.admin_customer.customer, 1);

        state.users.delete_user("uid-1").await.unwrap();

        assert_eq!(state.dashboard.stats().await.unwrap().count.user, 0);
    }
}
