//! Pure breakdowns of orders, products and users for the dashboard charts.

use chrono::NaiveDate;

use crate::catalog::{Gender, Order, OrderStatus, Role, User};

use super::types::{
    AdminCustomer, AgeGroups, LatestTransaction, OrderFulfillment, RevenueDistribution,
    StockAvailability, UserRatio,
};

const COST_SHARE_PERCENT: f64 = 30.0;

/// Sum of order totals.
pub fn total_revenue(orders: &[Order]) -> i64 {
    orders.iter().map(|o| o.total).sum()
}

/// Number of orders per fulfillment status.
pub fn order_fulfillment(orders: &[Order]) -> OrderFulfillment {
    orders
        .iter()
        .fold(OrderFulfillment::default(), |mut acc, order| {
            match order.status {
                OrderStatus::Processing => acc.processing += 1,
                OrderStatus::Shipped => acc.shipped += 1,
                OrderStatus::Delivered => acc.delivered += 1,
            }
            acc
        })
}

/// Splits the catalog into products with and without stock on hand.
pub fn stock_availability(total_products: u64, out_of_stock: u64) -> StockAvailability {
    StockAvailability {
        in_stock: total_products.saturating_sub(out_of_stock),
        out_of_stock,
    }
}

/// Breaks gross income down into margin, discount and the three flat costs.
pub fn revenue_distribution(gross_income: i64, discount: i64) -> RevenueDistribution {
    let cost = (gross_income as f64 * COST_SHARE_PERCENT / 100.0).round() as i64;
    RevenueDistribution {
        net_margin: gross_income - discount - cost * 3,
        discount,
        production_cost: cost,
        burnt: cost,
        marketing_cost: cost,
    }
}

/// Buckets users into teen (< 20), adult (20..40) and old (>= 40) on `today`.
pub fn age_groups(users: &[User], today: NaiveDate) -> AgeGroups {
    users.iter().fold(AgeGroups::default(), |mut acc, user| {
        match user.age(today) {
            age if age < 20 => acc.teen += 1,
            age if age < 40 => acc.adult += 1,
            _ => acc.old += 1,
        }
        acc
    })
}

pub fn gender_ratio(users: &[User]) -> UserRatio {
    users.iter().fold(UserRatio::default(), |mut acc, user| {
        match user.gender {
            Gender::Male => acc.male += 1,
            Gender::Female => acc.female += 1,
        }
        acc
    })
}

pub fn admin_customer_split(users: &[User]) -> AdminCustomer {
    users.iter().fold(AdminCustomer::default(), |mut acc, user| {
        match user.role {
            Role::Admin => acc.admin += 1,
            Role::User => acc.customer += 1,
        }
        acc
    })
}

/// The `limit` most recent orders, newest first.
pub fn latest_transactions(orders: &[Order], limit: usize) -> Vec<LatestTransaction> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    sorted
        .into_iter()
        .take(limit)
        .map(|order| LatestTransaction {
            id: order.id,
            discount: order.discount,
            amount: order.total,
            quantity: order.items.len(),
            status: order.status,
        })
        .collect()
}
