//! Order placement and fulfillment.

use std::sync::Arc;

use uuid::Uuid;

use storefront_core::cache::InvalidationDescriptor;
use storefront_core::catalog::{build_order, validate_new_order, NewOrderRequest, Order};
use storefront_core::storage::{OrderRepository, RepositoryError};

use crate::error::Result;
use crate::invalidation::InvalidationRouter;
use crate::stock::StockAdjuster;

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    stock: StockAdjuster,
    router: InvalidationRouter,
}

impl OrderService {
    /// `orders` is expected to be the cached decorator; `stock` should write
    /// to the uncached product store, since this service invalidates product
    /// keys once for the whole order.
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        stock: StockAdjuster,
        router: InvalidationRouter,
    ) -> Self {
        Self {
            orders,
            stock,
            router,
        }
    }

    pub async fn all_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.list_orders().await?)
    }

    pub async fn my_orders(&self, user_id: &str) -> Result<Vec<Order>> {
        Ok(self.orders.orders_for_user(user_id).await?)
    }

    pub async fn order(&self, id: Uuid) -> Result<Order> {
        self.find(id).await
    }

    /// Stores the order, then decrements stock for its line items.
    ///
    /// Product, order and admin keys are invalidated after the stock pass
    /// even when it fails partway, because earlier decrements stay written.
    /// The order itself is kept in that case and the stock error returned.
    pub async fn new_order(&self, request: NewOrderRequest) -> Result<Order> {
        validate_new_order(&request)?;

        let order = build_order(request);
        self.orders.create_order(&order).await?;

        let stock_result = self.stock.apply_order(&order.items).await;

        self.router
            .invalidate(
                &InvalidationDescriptor::new()
                    .product()
                    .order()
                    .admin()
                    .with_user_id(order.user_id.clone())
                    .with_order_id(order.id)
                    .with_product_id(order.product_ids()),
            )
            .await;

        if let Err(err) = stock_result {
            tracing::warn!(order_id = %order.id, error = %err, "Stock adjustment incomplete");
            return Err(err.into());
        }

        tracing::info!(order_id = %order.id, items = order.items.len(), "Order placed");
        Ok(order)
    }

    /// Advances the order one fulfillment step. Delivered orders stay
    /// delivered.
    pub async fn process_order(&self, id: Uuid) -> Result<Order> {
        let mut order = self.find(id).await?;
        order.status = order.status.advance();
        self.orders.update_order(&order).await?;

        tracing::info!(order_id = %id, status = ?order.status, "Order processed");
        Ok(order)
    }

    pub async fn delete_order(&self, id: Uuid) -> Result<()> {
        self.orders.delete_order(id).await?;

        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Order> {
        self.orders
            .get_order(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Order", id).into())
    }
}
