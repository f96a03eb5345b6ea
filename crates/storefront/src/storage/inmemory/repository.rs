//! In-memory repository implementation.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use storefront_core::catalog::{
    filter_products, paginate_products, Order, Product, ProductPage, ProductQuery, User,
};
use storefront_core::storage::{
    DateRange, OrderRepository, ProductRepository, RepositoryError, Result, UserRepository,
};

/// In-memory document store.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn latest_products(&self, limit: usize) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut latest: Vec<Product> = products.values().cloned().collect();
        latest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        latest.truncate(limit);
        Ok(latest)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        Ok(all)
    }

    async fn search_products(&self, query: &ProductQuery, per_page: usize) -> Result<ProductPage> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        let matches = filter_products(&all, query);
        Ok(paginate_products(matches, query.page, per_page))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>> {
        let products = self.products.read().await;
        let categories: BTreeSet<&String> = products.values().map(|p| &p.category).collect();
        Ok(categories.into_iter().cloned().collect())
    }

    async fn count_products(&self) -> Result<u64> {
        let products = self.products.read().await;
        Ok(products.len() as u64)
    }

    async fn count_by_category(&self, category: &str) -> Result<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| p.category == category).count() as u64)
    }

    async fn count_out_of_stock(&self) -> Result<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| !p.in_stock()).count() as u64)
    }

    async fn products_created_in(&self, range: DateRange) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| range.contains(p.created_at))
            .cloned()
            .collect())
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Product",
                id: product.id.to_string(),
            });
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        if !products.contains_key(&product.id) {
            return Err(RepositoryError::not_found("Product", product.id));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        let mut products = self.products.write().await;
        if products.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Product", id));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by_key(|o| o.created_at);
        Ok(all)
    }

    async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut mine: Vec<Order> = orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by_key(|o| o.created_at);
        Ok(mine)
    }

    async fn orders_created_in(&self, range: DateRange) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|o| range.contains(o.created_at))
            .cloned()
            .collect())
    }

    async fn count_orders(&self) -> Result<u64> {
        let orders = self.orders.read().await;
        Ok(orders.len() as u64)
    }

    async fn create_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Order",
                id: order.id.to_string(),
            });
        }
        orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn update_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if !orders.contains_key(&order.id) {
            return Err(RepositoryError::not_found("Order", order.id));
        }
        orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn delete_order(&self, id: Uuid) -> Result<()> {
        let mut orders = self.orders.write().await;
        if orders.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Order", id));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }

    async fn users_created_in(&self, range: DateRange) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| range.contains(u.created_at))
            .cloned()
            .collect())
    }

    async fn count_users(&self) -> Result<u64> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.id.clone(),
            });
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = self.users.write().await;
        if users.remove(id).is_none() {
            return Err(RepositoryError::not_found("User", id));
        }
        Ok(())
    }
}
