//! Cached order repository decorator.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use storefront_core::cache::{
    my_orders_key, order_key, InvalidationDescriptor, KeyCache, ALL_ORDERS_KEY,
};
use storefront_core::catalog::Order;
use storefront_core::storage::{DateRange, OrderRepository, Result};

use crate::cache::{read_through, read_through_optional};
use crate::invalidation::InvalidationRouter;

/// Cached order repository decorator.
///
/// - **Reads**: `all-orders`, `my-orders-<user>` and `order-<id>` are served
///   through the cache. Counts and date range queries are not cached.
/// - **Writes**: persist, then invalidate the order and admin keys for the
///   order's user and id.
pub struct CachedOrderRepository<R>
where
    R: OrderRepository,
{
    repository: Arc<R>,
    cache: Arc<dyn KeyCache>,
    router: InvalidationRouter,
}

impl<R> CachedOrderRepository<R>
where
    R: OrderRepository,
{
    /// Creates a new cached order repository.
    pub fn new(repository: Arc<R>, cache: Arc<dyn KeyCache>) -> Self {
        let router = InvalidationRouter::new(cache.clone());
        Self {
            repository,
            cache,
            router,
        }
    }

    async fn invalidate_order(&self, order: &Order) {
        self.router
            .invalidate(
                &InvalidationDescriptor::new()
                    .order()
                    .admin()
                    .with_user_id(order.user_id.clone())
                    .with_order_id(order.id),
            )
            .await;
    }
}

#[async_trait]
impl<R> OrderRepository for CachedOrderRepository<R>
where
    R: OrderRepository + 'static,
{
    async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        read_through_optional(self.cache.as_ref(), &order_key(Some(id)), || {
            self.repository.get_order(id)
        })
        .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        read_through(self.cache.as_ref(), ALL_ORDERS_KEY, || {
            self.repository.list_orders()
        })
        .await
    }

    async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>> {
        read_through(self.cache.as_ref(), &my_orders_key(Some(user_id)), || {
            self.repository.orders_for_user(user_id)
        })
        .await
    }

    async fn orders_created_in(&self, range: DateRange) -> Result<Vec<Order>> {
        self.repository.orders_created_in(range).await
    }

    async fn count_orders(&self) -> Result<u64> {
        self.repository.count_orders().await
    }

    async fn create_order(&self, order: &Order) -> Result<()> {
        self.repository.create_order(order).await?;
        self.invalidate_order(order).await;

        tracing::debug!(order_id = %order.id, user_id = %order.user_id, "Order created");
        Ok(())
    }

    async fn update_order(&self, order: &Order) -> Result<()> {
        self.repository.update_order(order).await?;
        self.invalidate_order(order).await;

        tracing::debug!(order_id = %order.id, status = ?order.status, "Order updated");
        Ok(())
    }

    async fn delete_order(&self, id: Uuid) -> Result<()> {
        // The user id is only known from the stored order.
        let existing = self.repository.get_order(id).await?;
        self.repository.delete_order(id).await?;

        if let Some(order) = existing {
            self.invalidate_order(&order).await;
        }

        tracing::debug!(order_id = %id, "Order deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;
    use storefront_core::cache::{ADMIN_BAR_CHARTS_KEY, UNDEFINED_ID};
    use storefront_core::catalog::{OrderLineItem, OrderStatus};

    fn setup() -> (Arc<MemoryCache>, CachedOrderRepository<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(MemoryCache::new());
        let cached = CachedOrderRepository::new(repo, cache.clone());
        (cache, cached)
    }

    fn order(user_id: &str) -> Order {
        Order::new(user_id, vec![OrderLineItem::new(Uuid::new_v4(), 1)])
    }

    #[tokio::test]
    async fn test_reads_populate_their_keys() {
        let (cache, cached) = setup();
        let placed = order("u1");
        cached.create_order(&placed).await.unwrap();

        cached.list_orders().await.unwrap();
        cached.orders_for_user("u1").await.unwrap();
        cached.get_order(placed.id).await.unwrap();

        assert!(cache.has(ALL_ORDERS_KEY).await.unwrap());
        assert!(cache.has("my-orders-u1").await.unwrap());
        assert!(cache.has(&order_key(Some(placed.id))).await.unwrap());
        assert!(!cache.has(&format!("my-orders-{UNDEFINED_ID}")).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_invalidates_only_that_users_orders() {
        let (cache, cached) = setup();
        let mut mine = order("u1");
        cached.create_order(&mine).await.unwrap();
        cached.create_order(&order("u2")).await.unwrap();
        cached.orders_for_user("u1").await.unwrap();
        cached.orders_for_user("u2").await.unwrap();
        cached.get_order(mine.id).await.unwrap();
        cache.set(ADMIN_BAR_CHARTS_KEY, b"{}").await.unwrap();

        mine.status = OrderStatus::Shipped;
        cached.update_order(&mine).await.unwrap();

        assert!(!cache.has("my-orders-u1").await.unwrap());
        assert!(!cache.has(&order_key(Some(mine.id))).await.unwrap());
        assert!(!cache.has(ADMIN_BAR_CHARTS_KEY).await.unwrap());
        assert!(cache.has("my-orders-u2").await.unwrap());
        assert_eq!(
            cached.get_order(mine.id).await.unwrap().unwrap().status,
            OrderStatus::Shipped
        );
    }

    #[tokio::test]
    async fn test_delete_invalidates_user_listing() {
        let (cache, cached) = setup();
        let placed = order("u1");
        cached.create_order(&placed).await.unwrap();
        assert_eq!(cached.orders_for_user("u1").await.unwrap().len(), 1);

        cached.delete_order(placed.id).await.unwrap();

        assert!(!cache.has("my-orders-u1").await.unwrap());
        assert!(cached.orders_for_user("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_order_fails() {
        let (_cache, cached) = setup();
        let err = cached.delete_order(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
