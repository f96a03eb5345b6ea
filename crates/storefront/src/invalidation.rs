//! Deletes the cache keys affected by a write.
//!
//! Callers must invoke [`InvalidationRouter::invalidate`] only after the write
//! it protects has completed. Invalidating first leaves a window in which a
//! concurrent read repopulates the cache with pre-write data.

use std::sync::Arc;

use storefront_core::cache::{InvalidationDescriptor, KeyCache};

/// Maps an [`InvalidationDescriptor`] onto bulk deletes against the cache.
#[derive(Clone)]
pub struct InvalidationRouter {
    cache: Arc<dyn KeyCache>,
}

impl InvalidationRouter {
    pub fn new(cache: Arc<dyn KeyCache>) -> Self {
        Self { cache }
    }

    /// Deletes every key the descriptor names, one bulk delete per flag.
    ///
    /// Never fails: missing keys are a no-op and backend errors are logged.
    pub async fn invalidate(&self, descriptor: &InvalidationDescriptor) {
        if descriptor.is_empty() {
            return;
        }

        if descriptor.has_undefined_order_ids() {
            tracing::warn!(
                user_id = ?descriptor.user_id,
                order_id = ?descriptor.order_id,
                "Order invalidation without user or order id; placeholder keys used"
            );
        }

        if let Some(keys) = descriptor.product_keys() {
            self.delete("product", keys).await;
        }
        if let Some(keys) = descriptor.order_keys() {
            self.delete("order", keys).await;
        }
        if let Some(keys) = descriptor.admin_keys() {
            self.delete("admin", keys).await;
        }
    }

    async fn delete(&self, domain: &'static str, keys: Vec<String>) {
        match self.cache.delete(&keys).await {
            Ok(()) => tracing::debug!(domain, ?keys, "Cache invalidated"),
            Err(err) => tracing::warn!(domain, ?keys, error = %err, "Cache invalidation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use storefront_core::cache::{product_key, CacheError, Result};
    use uuid::Uuid;

    /// Records every bulk delete it receives.
    #[derive(Default)]
    struct RecordingCache {
        deletes: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl KeyCache for RecordingCache {
        async fn has(&self, _key: &str) -> Result<bool> {
            Ok(false)
        }

        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
            Ok(())
        }

        async fn delete(&self, keys: &[String]) -> Result<()> {
            self.deletes.lock().unwrap().push(keys.to_vec());
            Ok(())
        }
    }

    struct FailingCache;

    #[async_trait]
    impl KeyCache for FailingCache {
        async fn has(&self, _key: &str) -> Result<bool> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn delete(&self, _keys: &[String]) -> Result<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }
    }

    async fn seeded_cache(keys: &[&str]) -> Arc<MemoryCache> {
        let cache = Arc::new(MemoryCache::new());
        for key in keys {
            cache.set(key, b"cached").await.unwrap();
        }
        cache
    }

    #[tokio::test]
    async fn test_empty_then_set_then_invalidate() {
        let cache = Arc::new(MemoryCache::new());
        let router = InvalidationRouter::new(cache.clone());

        assert!(!cache.has("latest-products").await.unwrap());

        cache.set("latest-products", b"X").await.unwrap();
        assert!(cache.has("latest-products").await.unwrap());
        assert_eq!(
            cache.get("latest-products").await.unwrap(),
            Some(b"X".to_vec())
        );

        router
            .invalidate(&InvalidationDescriptor::new().product())
            .await;

        assert!(!cache.has("latest-products").await.unwrap());
    }

    #[tokio::test]
    async fn test_product_invalidation_spares_unrelated_keys() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let product = product_key(id);
        let other_product = product_key(other);
        let cache = seeded_cache(&[
            "latest-products",
            "categories",
            "all-products",
            product.as_str(),
            other_product.as_str(),
            "all-orders",
            "admin-stats",
        ])
        .await;
        let router = InvalidationRouter::new(cache.clone());

        router
            .invalidate(&InvalidationDescriptor::new().product().with_product_id(id))
            .await;

        for key in ["latest-products", "categories", "all-products", product.as_str()] {
            assert!(!cache.has(key).await.unwrap(), "{key} should be gone");
        }
        assert!(cache.has(&other_product).await.unwrap());
        assert!(cache.has("all-orders").await.unwrap());
        assert!(cache.has("admin-stats").await.unwrap());
    }

    #[tokio::test]
    async fn test_each_flag_issues_its_own_bulk_delete() {
        let cache = Arc::new(RecordingCache::default());
        let router = InvalidationRouter::new(cache.clone());

        router
            .invalidate(
                &InvalidationDescriptor::new()
                    .product()
                    .order()
                    .admin()
                    .with_product_id(vec![Uuid::nil(), Uuid::nil()])
                    .with_user_id("u1")
                    .with_order_id(Uuid::nil()),
            )
            .await;

        let deletes = cache.deletes.lock().unwrap();
        assert_eq!(deletes.len(), 3);
        assert_eq!(deletes[0].len(), 5);
        assert_eq!(deletes[1].len(), 3);
        assert_eq!(deletes[2].len(), 4);
    }

    #[tokio::test]
    async fn test_single_product_id_deleted_twice_in_one_batch() {
        let cache = Arc::new(RecordingCache::default());
        let router = InvalidationRouter::new(cache.clone());
        let id = Uuid::new_v4();

        router
            .invalidate(&InvalidationDescriptor::new().product().with_product_id(id))
            .await;

        let deletes = cache.deletes.lock().unwrap();
        let expected = product_key(id);
        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes[0].iter().filter(|k| **k == expected).count(), 2);
    }

    #[tokio::test]
    async fn test_order_invalidation_targets_user_and_order() {
        let order_id = Uuid::new_v4();
        let order = format!("order-{}", order_id);
        let cache = seeded_cache(&["all-orders", "my-orders-u1", "my-orders-u2", order.as_str()]).await;
        let router = InvalidationRouter::new(cache.clone());

        router
            .invalidate(
                &InvalidationDescriptor::new()
                    .order()
                    .with_user_id("u1")
                    .with_order_id(order_id),
            )
            .await;

        assert!(!cache.has("all-orders").await.unwrap());
        assert!(!cache.has("my-orders-u1").await.unwrap());
        assert!(!cache.has(&order).await.unwrap());
        assert!(cache.has("my-orders-u2").await.unwrap());
    }

    #[tokio::test]
    async fn test_order_without_ids_misses_real_keys() {
        let cache = seeded_cache(&["all-orders", "my-orders-u1"]).await;
        let router = InvalidationRouter::new(cache.clone());

        router
            .invalidate(&InvalidationDescriptor::new().order())
            .await;

        assert!(!cache.has("all-orders").await.unwrap());
        assert!(cache.has("my-orders-u1").await.unwrap());
    }

    #[tokio::test]
    async fn test_admin_invalidation() {
        let cache = seeded_cache(&[
            "admin-stats",
            "admin-pie-charts",
            "admin-bar-charts",
            "admin-line-charts",
            "categories",
        ])
        .await;
        let router = InvalidationRouter::new(cache.clone());

        router
            .invalidate(&InvalidationDescriptor::new().admin())
            .await;

        assert_eq!(cache.len().await, 1);
        assert!(cache.has("categories").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_descriptor_issues_no_delete() {
        let cache = Arc::new(RecordingCache::default());
        let router = InvalidationRouter::new(cache.clone());

        router.invalidate(&InvalidationDescriptor::new()).await;

        assert!(cache.deletes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_is_swallowed() {
        let router = InvalidationRouter::new(Arc::new(FailingCache));

        router
            .invalidate(&InvalidationDescriptor::new().product().order().admin())
            .await;
    }
}
