use super::error::{OrderError, ProductError, UserError, MAX_PRODUCT_PHOTOS};
use super::requests::{
    NewOrderRequest, NewProductRequest, NewUserRequest, PriceSort, ProductPage, ProductQuery,
    UpdateProductRequest,
};
use super::types::{Order, Photo, Product, User};

/// Validates a product creation request and its photo count.
pub fn validate_new_product(
    request: &NewProductRequest,
    photo_count: usize,
) -> Result<(), ProductError> {
    if photo_count == 0 {
        return Err(ProductError::MissingPhotos);
    }
    if photo_count > MAX_PRODUCT_PHOTOS {
        return Err(ProductError::TooManyPhotos);
    }

    let blank = |field: &Option<String>| field.as_deref().is_none_or(|s| s.trim().is_empty());
    if blank(&request.name) {
        return Err(ProductError::MissingField("name"));
    }
    if request.price.is_none() {
        return Err(ProductError::MissingField("price"));
    }
    if request.stock.is_none() {
        return Err(ProductError::MissingField("stock"));
    }
    if blank(&request.category) {
        return Err(ProductError::MissingField("category"));
    }
    if blank(&request.description) {
        return Err(ProductError::MissingField("description"));
    }
    Ok(())
}

/// Builds a product from a validated request. Categories are stored
/// lower-cased so the distinct-category listing doesn't split on case.
pub fn build_product(request: NewProductRequest, photos: Vec<Photo>) -> Product {
    Product::new(
        request.name.unwrap_or_default(),
        request.price.unwrap_or_default(),
        request.stock.unwrap_or_default(),
        request.category.unwrap_or_default().to_lowercase(),
        request.description.unwrap_or_default(),
    )
    .with_photos(photos)
}

/// Applies a partial update in place.
pub fn apply_product_update(product: &mut Product, request: UpdateProductRequest) {
    if let Some(name) = request.name {
        product.name = name;
    }
    if let Some(price) = request.price {
        product.price = price;
    }
    if let Some(stock) = request.stock {
        product.stock = stock;
    }
    if let Some(category) = request.category {
        product.category = category.to_lowercase();
    }
    if let Some(description) = request.description {
        product.description = description;
    }
}

/// Returns every product matching the query's filters, sorted by price when
/// requested. Pagination is applied separately by [`paginate_products`].
pub fn filter_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let search = query.search.as_ref().map(|s| s.to_lowercase());

    let mut matches: Vec<Product> = products
        .iter()
        .filter(|p| {
            search
                .as_deref()
                .is_none_or(|s| p.name.to_lowercase().contains(s))
                && query.category.as_deref().is_none_or(|c| p.category == c)
                && query.max_price.is_none_or(|max| p.price <= max)
        })
        .cloned()
        .collect();

    match query.sort {
        Some(PriceSort::Asc) => matches.sort_by_key(|p| p.price),
        Some(PriceSort::Desc) => matches.sort_by(|a, b| b.price.cmp(&a.price)),
        None => {}
    }
    matches
}

/// Cuts one page out of `matches`. A page past the end is empty.
pub fn paginate_products(matches: Vec<Product>, page: Option<usize>, per_page: usize) -> ProductPage {
    let per_page = per_page.max(1);
    let page = page.filter(|p| *p > 0).unwrap_or(1);
    let total_pages = matches.len().div_ceil(per_page);

    let products = matches
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    ProductPage {
        products,
        total_pages,
    }
}

/// Validates an order before it is placed.
pub fn validate_new_order(request: &NewOrderRequest) -> Result<(), OrderError> {
    if request.user_id.trim().is_empty() {
        return Err(OrderError::MissingUser);
    }
    if request.items.is_empty() {
        return Err(OrderError::EmptyItems);
    }
    if let Some(item) = request.items.iter().find(|item| item.quantity <= 0) {
        return Err(OrderError::InvalidQuantity(item.quantity));
    }
    Ok(())
}

/// Builds a processing order from a validated request.
pub fn build_order(request: NewOrderRequest) -> Order {
    let mut order = Order::new(request.user_id, request.items);
    order.shipping_info = request.shipping_info;
    order.subtotal = request.subtotal;
    order.tax = request.tax;
    order.shipping_charges = request.shipping_charges;
    order.discount = request.discount;
    order.total = request.total;
    order
}

/// Builds a regular user from a sign-up, rejecting it unless every field is
/// present.
pub fn build_user(request: NewUserRequest) -> Result<User, UserError> {
    let required = |field: Option<String>, name: &'static str| {
        field
            .filter(|s| !s.trim().is_empty())
            .ok_or(UserError::MissingField(name))
    };

    let id = required(request.id, "id")?;
    let name = required(request.name, "name")?;
    let email = required(request.email, "email")?;
    let photo = required(request.photo, "photo")?;
    let gender = request.gender.ok_or(UserError::MissingField("gender"))?;
    let dob = request.dob.ok_or(UserError::MissingField("dob"))?;

    Ok(User::new(id, name, email, gender, dob).with_photo(photo))
}
