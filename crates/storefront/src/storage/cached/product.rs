//! Cached product repository decorator.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use storefront_core::cache::{
    product_key, InvalidationDescriptor, KeyCache, ALL_PRODUCTS_KEY, CATEGORIES_KEY,
    LATEST_PRODUCTS_KEY,
};
use storefront_core::catalog::{Product, ProductPage, ProductQuery};
use storefront_core::storage::{DateRange, ProductRepository, Result};

use crate::cache::{read_through, read_through_optional};
use crate::invalidation::InvalidationRouter;

/// Cached product repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: single products, the latest listing, the full listing and the
///   category list are served through the cache. Searches, counts and date
///   range queries go straight to the store.
/// - **Writes**: persist to the repository, then invalidate the product
///   listing and admin keys. Updates and deletes also drop `product-<id>`.
pub struct CachedProductRepository<R>
where
    R: ProductRepository,
{
    repository: Arc<R>,
    cache: Arc<dyn KeyCache>,
    router: InvalidationRouter,
}

impl<R> CachedProductRepository<R>
where
    R: ProductRepository,
{
    /// Creates a new cached product repository.
    pub fn new(repository: Arc<R>, cache: Arc<dyn KeyCache>) -> Self {
        let router = InvalidationRouter::new(cache.clone());
        Self {
            repository,
            cache,
            router,
        }
    }
}

#[async_trait]
impl<R> ProductRepository for CachedProductRepository<R>
where
    R: ProductRepository + 'static,
{
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        read_through_optional(self.cache.as_ref(), &product_key(id), || {
            self.repository.get_product(id)
        })
        .await
    }

    /// The `latest-products` key does not encode `limit`; callers are
    /// expected to use one configured limit.
    async fn latest_products(&self, limit: usize) -> Result<Vec<Product>> {
        read_through(self.cache.as_ref(), LATEST_PRODUCTS_KEY, || {
            self.repository.latest_products(limit)
        })
        .await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        read_through(self.cache.as_ref(), ALL_PRODUCTS_KEY, || {
            self.repository.list_products()
        })
        .await
    }

    async fn search_products(&self, query: &ProductQuery, per_page: usize) -> Result<ProductPage> {
        self.repository.search_products(query, per_page).await
    }

    async fn distinct_categories(&self) -> Result<Vec<String>> {
        read_through(self.cache.as_ref(), CATEGORIES_KEY, || {
            self.repository.distinct_categories()
        })
        .await
    }

    async fn count_products(&self) -> Result<u64> {
        self.repository.count_products().await
    }

    async fn count_by_category(&self, category: &str) -> Result<u64> {
        self.repository.count_by_category(category).await
    }

    async fn count_out_of_stock(&self) -> Result<u64> {
        self.repository.count_out_of_stock().await
    }

    async fn products_created_in(&self, range: DateRange) -> Result<Vec<Product>> {
        self.repository.products_created_in(range).await
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        self.repository.create_product(product).await?;

        self.router
            .invalidate(&InvalidationDescriptor::new().product().admin())
            .await;

        tracing::debug!(product_id = %product.id, "Product created");
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        self.repository.update_product(product).await?;

        self.router
            .invalidate(
                &InvalidationDescriptor::new()
                    .product()
                    .admin()
                    .with_product_id(product.id),
            )
            .await;

        tracing::debug!(product_id = %product.id, "Product updated");
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        self.repository.delete_product(id).await?;

        self.router
            .invalidate(
                &InvalidationDescriptor::new()
                    .product()
                    .admin()
                    .with_product_id(id),
            )
            .await;

        tracing::debug!(product_id = %id, "Product deleted");
        Ok(())
    }
}
