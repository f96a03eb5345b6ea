mod aggregation;
mod breakdown;
mod error;
mod types;

pub use aggregation::{
    month_diff, monthly_buckets, monthly_counts, monthly_sums, percentage_change, share_percent,
    Dated,
};
pub use breakdown::{
    admin_customer_split, age_groups, gender_ratio, latest_transactions, order_fulfillment,
    revenue_distribution, stock_availability, total_revenue,
};
pub use error::StatsError;
pub use types::{
    AdminCustomer, AgeGroups, BarCharts, CategoryShare, ChangePercent, DashboardCharts,
    DashboardCounts, DashboardStats, LatestTransaction, LineCharts, OrderFulfillment, PieCharts,
    RevenueDistribution, StockAvailability, UserRatio,
};
