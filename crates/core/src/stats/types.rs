use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::OrderStatus;

/// Percentage of the catalog that belongs to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub share: i64,
}

/// Month-over-month change per metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePercent {
    pub revenue: i64,
    pub product: i64,
    pub user: i64,
    pub order: i64,
}

/// All-time totals per metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub revenue: i64,
    pub product: i64,
    pub user: i64,
    pub order: i64,
}

/// Six-month order series shown on the dashboard summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub order: Vec<i64>,
    pub revenue: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRatio {
    pub male: u64,
    pub female: u64,
}

/// Compact view of a recent order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestTransaction {
    pub id: Uuid,
    pub discount: i64,
    pub amount: i64,
    pub quantity: usize,
    pub status: OrderStatus,
}

/// Cached under `admin-stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub category_count: Vec<CategoryShare>,
    pub change_percent: ChangePercent,
    pub count: DashboardCounts,
    pub chart: DashboardCharts,
    pub user_ratio: UserRatio,
    pub latest_transaction: Vec<LatestTransaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFulfillment {
    pub processing: u64,
    pub shipped: u64,
    pub delivered: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAvailability {
    pub in_stock: u64,
    pub out_of_stock: u64,
}

/// Where gross income goes. Production, burnt and marketing costs are each
/// modelled as a flat 30% of gross income.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueDistribution {
    pub net_margin: i64,
    pub discount: i64,
    pub production_cost: i64,
    pub burnt: i64,
    pub marketing_cost: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroups {
    pub teen: u64,
    pub adult: u64,
    pub old: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCustomer {
    pub admin: u64,
    pub customer: u64,
}

/// Cached under `admin-pie-charts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieCharts {
    pub order_fulfillment: OrderFulfillment,
    pub product_categories: Vec<CategoryShare>,
    pub stock_availability: StockAvailability,
    pub revenue_distribution: RevenueDistribution,
    pub users_age_group: AgeGroups,
    pub admin_customer: AdminCustomer,
}

/// Cached under `admin-bar-charts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarCharts {
    /// Products created per month, last 6 months.
    pub products: Vec<i64>,
    /// Users registered per month, last 6 months.
    pub users: Vec<i64>,
    /// Orders placed per month, last 12 months.
    pub orders: Vec<i64>,
}

/// Cached under `admin-line-charts`. Every series covers 12 months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCharts {
    pub users: Vec<i64>,
    pub products: Vec<i64>,
    pub discount: Vec<i64>,
    pub revenue: Vec<i64>,
}
