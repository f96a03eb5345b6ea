use thiserror::Error;

use storefront_core::assets::AssetError;
use storefront_core::catalog::{OrderError, ProductError, UserError};
use storefront_core::stats::StatsError;
use storefront_core::storage::RepositoryError;

/// Errors surfaced by the storefront services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    User(#[from] UserError),
}

impl ServiceError {
    /// Returns true if the error reports a missing document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Repository(err) if err.is_not_found())
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
