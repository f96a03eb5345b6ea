use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;

use storefront_core::catalog::{
    Gender, Order, OrderLineItem, OrderStatus, Photo, Product, Role, ShippingInfo, User,
};
use storefront_core::storage::{OrderRepository, ProductRepository, RepositoryError, UserRepository};

use crate::storage::InMemoryRepository;

const PRODUCT_NAMES: &[&str] = &[
    "Desk Lamp",
    "Ceramic Mug",
    "Wool Rug",
    "Travel Kettle",
    "Notebook",
    "Board Game",
    "Headphones",
    "Plant Pot",
];

const CATEGORIES: &[&str] = &["home", "kitchen", "books", "toys", "electronics", "garden"];

const FIRST_NAMES: &[&str] = &["Ana", "Bruno", "Carla", "Diego", "Elena", "Facundo", "Gabi"];

const CITIES: &[&str] = &["Montevideo", "Salto", "Paysandu", "Rivera"];

/// How many records of each kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSizes {
    pub products: usize,
    pub users: usize,
    pub orders: usize,
}

/// Fills `store` with random users, products and orders created within the
/// last twelve months. The first user is an admin.
///
/// Orders reference seeded products but do not touch their stock.
pub async fn generate_mock_store(
    store: &InMemoryRepository,
    sizes: SeedSizes,
) -> Result<(), RepositoryError> {
    let mut rng = StdRng::from_os_rng();
    let now = Utc::now();

    let users = generate_mock_users(&mut rng, sizes.users, now);
    let products = generate_mock_products(&mut rng, sizes.products, now);
    let orders = generate_mock_orders(&mut rng, sizes.orders, &users, &products, now);

    for user in &users {
        store.create_user(user).await?;
    }
    for product in &products {
        store.create_product(product).await?;
    }
    for order in &orders {
        store.create_order(order).await?;
    }

    tracing::info!(
        users = users.len(),
        products = products.len(),
        orders = orders.len(),
        "Seeded demo data"
    );
    Ok(())
}

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// A random instant in the year before `now`.
fn created_within_year(rng: &mut StdRng, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(rng.random_range(0..365)) - Duration::minutes(rng.random_range(0..1440))
}

fn generate_mock_users(rng: &mut StdRng, count: usize, now: DateTime<Utc>) -> Vec<User> {
    (0..count)
        .map(|i| {
            let name = pick(rng, FIRST_NAMES);
            let gender = if rng.random_bool(0.5) {
                Gender::Female
            } else {
                Gender::Male
            };
            let dob = NaiveDate::from_ymd_opt(
                rng.random_range(1960..=2012),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
            )
            .unwrap_or_default();
            let role = if i == 0 { Role::Admin } else { Role::User };

            User::new(
                format!("customer-{i}"),
                name,
                format!("{}.{i}@example.com", name.to_lowercase()),
                gender,
                dob,
            )
            .with_role(role)
            .with_created_at(created_within_year(rng, now))
        })
        .collect()
}

fn generate_mock_products(rng: &mut StdRng, count: usize, now: DateTime<Utc>) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let name = pick(rng, PRODUCT_NAMES);
            let product = Product::new(
                name,
                rng.random_range(5..=500),
                rng.random_range(0..=30),
                pick(rng, CATEGORIES),
                format!("{name} from the demo catalog"),
            );
            let public_id = format!("storefront/demo-{i}");
            let url = format!("https://assets.storefront.local/{public_id}");
            product
                .with_photos(vec![Photo::new(public_id, url)])
                .with_created_at(created_within_year(rng, now))
        })
        .collect()
}

fn generate_mock_orders(
    rng: &mut StdRng,
    count: usize,
    users: &[User],
    products: &[Product],
    now: DateTime<Utc>,
) -> Vec<Order> {
    if products.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let items: Vec<OrderLineItem> = (0..rng.random_range(1..=3))
                .map(|_| {
                    let product = &products[rng.random_range(0..products.len())];
                    let mut item = OrderLineItem::new(product.id, rng.random_range(1..=3))
                        .with_name(product.name.clone())
                        .with_price(product.price);
                    item.photo = product.photos.first().map(|p| p.url.clone());
                    item
                })
                .collect();

            let subtotal: i64 = items.iter().map(|i| i.price * i.quantity).sum();
            let tax = subtotal * 18 / 100;
            let shipping_charges = if subtotal > 1000 { 0 } else { 200 };
            let discount = rng.random_range(0..=subtotal / 10);
            let status = match rng.random_range(0..3) {
                0 => OrderStatus::Processing,
                1 => OrderStatus::Shipped,
                _ => OrderStatus::Delivered,
            };
            let user_id = if users.is_empty() {
                "customer-0".to_string()
            } else {
                users[rng.random_range(0..users.len())].id.clone()
            };

            let mut order = Order::new(user_id, items)
                .with_discount(discount)
                .with_total(subtotal + tax + shipping_charges - discount)
                .with_status(status)
                .with_created_at(created_within_year(rng, now));
            order.subtotal = subtotal;
            order.tax = tax;
            order.shipping_charges = shipping_charges;
            order.shipping_info = ShippingInfo {
                address: format!("{} Main St", rng.random_range(1..=999)),
                city: pick(rng, CITIES).to_string(),
                state: "Uruguay".to_string(),
                country: "UY".to_string(),
                pin_code: format!("{:05}", rng.random_range(10000..=99999)),
            };
            order
        })
        .collect()
}
