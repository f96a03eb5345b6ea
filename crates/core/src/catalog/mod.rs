mod error;
mod operations;
mod requests;
mod types;

pub use error::{OrderError, ProductError, UserError, MAX_PRODUCT_PHOTOS};
pub use operations::{
    apply_product_update, build_order, build_product, build_user, filter_products,
    paginate_products, validate_new_order, validate_new_product,
};
pub use requests::{
    NewOrderRequest, NewProductRequest, NewUserRequest, PhotoUpload, PriceSort, ProductPage,
    ProductQuery, UpdateProductRequest,
};
pub use types::{
    Gender, Order, OrderLineItem, OrderStatus, Photo, Product, Role, ShippingInfo, User,
};
