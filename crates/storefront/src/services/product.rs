//! Catalog management.

use std::sync::Arc;

use uuid::Uuid;

use storefront_core::assets::AssetHost;
use storefront_core::catalog::{
    apply_product_update, build_product, validate_new_product, NewProductRequest, PhotoUpload,
    Product, ProductError, ProductPage, ProductQuery, UpdateProductRequest, MAX_PRODUCT_PHOTOS,
};
use storefront_core::storage::{ProductRepository, RepositoryError};

use crate::error::Result;

/// Product reads and writes on top of a cached product repository.
///
/// Writes go through the repository decorator, which owns invalidation.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    assets: Arc<dyn AssetHost>,
    latest_limit: usize,
    per_page: usize,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        assets: Arc<dyn AssetHost>,
        latest_limit: usize,
        per_page: usize,
    ) -> Self {
        Self {
            products,
            assets,
            latest_limit,
            per_page,
        }
    }

    pub async fn latest_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.latest_products(self.latest_limit).await?)
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        Ok(self.products.distinct_categories().await?)
    }

    pub async fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.list_products().await?)
    }

    pub async fn product(&self, id: Uuid) -> Result<Product> {
        self.find(id).await
    }

    pub async fn search(&self, query: &ProductQuery) -> Result<ProductPage> {
        Ok(self.products.search_products(query, self.per_page).await?)
    }

    /// Validates the request, uploads the photos and stores the product.
    ///
    /// Nothing is uploaded when validation fails.
    pub async fn create_product(
        &self,
        request: NewProductRequest,
        photos: &[PhotoUpload],
    ) -> Result<Product> {
        validate_new_product(&request, photos.len())?;

        let uploaded = self.assets.upload(photos).await?;
        let product = build_product(request, uploaded);
        self.products.create_product(&product).await?;

        tracing::info!(product_id = %product.id, category = %product.category, "Product created");
        Ok(product)
    }

    /// Applies a partial update. When new photos are supplied they replace
    /// the old ones, and the old assets are deleted from the host.
    pub async fn update_product(
        &self,
        id: Uuid,
        request: UpdateProductRequest,
        photos: &[PhotoUpload],
    ) -> Result<Product> {
        if photos.len() > MAX_PRODUCT_PHOTOS {
            return Err(ProductError::TooManyPhotos.into());
        }

        let mut product = self.find(id).await?;

        if !photos.is_empty() {
            let uploaded = self.assets.upload(photos).await?;
            self.assets.delete(&product.photo_ids()).await?;
            product.photos = uploaded;
        }

        apply_product_update(&mut product, request);
        self.products.update_product(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Deletes the product's assets, then the product.
    pub async fn delete_product(&self, id: Uuid) -> Result<()> {
        let product = self.find(id).await?;

        self.assets.delete(&product.photo_ids()).await?;
        self.products.delete_product(id).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Product> {
        self.products
            .get_product(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Product", id).into())
    }
}
