//! Stock decrements for placed orders.

use std::sync::Arc;

use storefront_core::catalog::OrderLineItem;
use storefront_core::storage::{ProductRepository, RepositoryError};

/// Applies order line items to product stock.
#[derive(Clone)]
pub struct StockAdjuster {
    products: Arc<dyn ProductRepository>,
}

impl StockAdjuster {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Decrements stock for each line item, in order.
    ///
    /// Items are applied one at a time and each write completes before the
    /// next lookup. The first missing product aborts the run with
    /// [`RepositoryError::NotFound`]; decrements already written stay
    /// written. Stock is not floored at zero.
    ///
    /// Does not invalidate the cache. The caller owns that step and must run
    /// it whether or not this returns an error.
    pub async fn apply_order(&self, items: &[OrderLineItem]) -> Result<(), RepositoryError> {
        for item in items {
            let mut product = self
                .products
                .get_product(item.product_id)
                .await?
                .ok_or_else(|| RepositoryError::not_found("Product", item.product_id))?;

            product.stock -= item.quantity;
            self.products.update_product(&product).await?;

            tracing::debug!(
                product_id = %product.id,
                quantity = item.quantity,
                stock = product.stock,
                "Stock decremented"
            );
        }
        Ok(())
    }
}
