//! Write paths and cached reads for the catalog, orders and users.

mod order;
mod product;
mod user;

pub use order::OrderService;
pub use product::ProductService;
pub use user::{SignUp, UserService};
