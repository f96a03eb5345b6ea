use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{Order, Product, ProductPage, ProductQuery, User};

use super::{DateRange, Result};

/// Repository for product (inventory) operations.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its ID.
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>>;

    /// Gets the `limit` most recently created products, newest first.
    async fn latest_products(&self, limit: usize) -> Result<Vec<Product>>;

    /// Gets every product.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Runs a filtered, sorted and paginated storefront search.
    async fn search_products(&self, query: &ProductQuery, per_page: usize) -> Result<ProductPage>;

    /// Gets the distinct category values, sorted.
    async fn distinct_categories(&self) -> Result<Vec<String>>;

    /// Counts every product.
    async fn count_products(&self) -> Result<u64>;

    /// Counts the products in `category`.
    async fn count_by_category(&self, category: &str) -> Result<u64>;

    /// Counts the products with no stock on hand.
    async fn count_out_of_stock(&self) -> Result<u64>;

    /// Gets the products created within `range`.
    async fn products_created_in(&self, range: DateRange) -> Result<Vec<Product>>;

    /// Creates a new product.
    async fn create_product(&self, product: &Product) -> Result<()>;

    /// Updates an existing product.
    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Deletes a product by its ID.
    async fn delete_product(&self, id: Uuid) -> Result<()>;
}

/// Repository for order operations.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Gets an order by its ID.
    async fn get_order(&self, id: Uuid) -> Result<Option<Order>>;

    /// Gets every order.
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Gets every order placed by `user_id`.
    async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>>;

    /// Gets the orders created within `range`.
    async fn orders_created_in(&self, range: DateRange) -> Result<Vec<Order>>;

    /// Counts every order.
    async fn count_orders(&self) -> Result<u64>;

    /// Creates a new order.
    async fn create_order(&self, order: &Order) -> Result<()>;

    /// Updates an existing order.
    async fn update_order(&self, order: &Order) -> Result<()>;

    /// Deletes an order by its ID.
    async fn delete_order(&self, id: Uuid) -> Result<()>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Gets every user.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Gets the users registered within `range`.
    async fn users_created_in(&self, range: DateRange) -> Result<Vec<User>>;

    /// Counts every user.
    async fn count_users(&self) -> Result<u64>;

    /// Creates a new user.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Deletes a user by their ID.
    async fn delete_user(&self, id: &str) -> Result<()>;
}
