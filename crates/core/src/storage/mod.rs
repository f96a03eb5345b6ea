mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::{OrderRepository, ProductRepository, UserRepository};
pub use types::DateRange;
