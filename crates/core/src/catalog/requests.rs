use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Gender, OrderLineItem, Product, ShippingInfo};

/// Fields required to create a product. Photos travel separately as raw
/// uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Partial update of a product. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSort {
    Asc,
    Desc,
}

/// Storefront search parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    pub sort: Option<PriceSort>,
    pub category: Option<String>,
    /// Inclusive upper bound on price.
    pub max_price: Option<i64>,
    /// 1-based page number. Missing or zero means the first page.
    pub page: Option<usize>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_pages: usize,
}

/// A raw file upload destined for the asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Fields required to place an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub user_id: String,
    pub shipping_info: ShippingInfo,
    pub items: Vec<OrderLineItem>,
    pub subtotal: i64,
    pub tax: i64,
    pub shipping_charges: i64,
    pub discount: i64,
    pub total: i64,
}

/// Sign-up payload. The id comes from the identity provider, so a repeat
/// sign-up carries the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
}
