use thiserror::Error;

/// Maximum number of photos a product may carry.
pub const MAX_PRODUCT_PHOTOS: usize = 5;

/// Errors that can occur when validating a product write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Please add at least one photo")]
    MissingPhotos,
    #[error("You can only upload {MAX_PRODUCT_PHOTOS} photos")]
    TooManyPhotos,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors that can occur when validating an order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order must reference a user")]
    MissingUser,
    #[error("Order must contain at least one item")]
    EmptyItems,
    #[error("Line item quantity must be positive (got {0})")]
    InvalidQuantity(i64),
}

/// Errors that can occur when validating a sign-up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Please provide all fields (missing {0})")]
    MissingField(&'static str),
}
