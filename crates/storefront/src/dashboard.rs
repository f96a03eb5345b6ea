//! Admin dashboard views.
//!
//! Every view is computed from the stores on a miss and cached under its
//! `admin-*` key until a product, order or user write invalidates the admin
//! domain. Month windows are calendar months ending with the clock's month.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use storefront_core::cache::{
    KeyCache, ADMIN_BAR_CHARTS_KEY, ADMIN_LINE_CHARTS_KEY, ADMIN_PIE_CHARTS_KEY, ADMIN_STATS_KEY,
};
use storefront_core::stats::{
    admin_customer_split, age_groups, gender_ratio, latest_transactions, monthly_counts,
    monthly_sums, order_fulfillment, percentage_change, revenue_distribution, stock_availability,
    total_revenue, BarCharts, CategoryShare, ChangePercent, DashboardCharts, DashboardCounts,
    DashboardStats, LineCharts, PieCharts,
};
use storefront_core::storage::{DateRange, OrderRepository, ProductRepository, UserRepository};

use crate::cache::read_through;
use crate::error::Result;
use crate::stats::StatsAggregator;

/// Source of the reference instant for month windows.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

const SUMMARY_MONTHS: u32 = 6;
const YEAR_MONTHS: u32 = 12;

#[derive(Clone)]
pub struct DashboardService {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    users: Arc<dyn UserRepository>,
    cache: Arc<dyn KeyCache>,
    stats: StatsAggregator,
    latest_transactions_limit: usize,
    clock: Clock,
}

impl DashboardService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn KeyCache>,
        latest_transactions_limit: usize,
    ) -> Self {
        Self {
            stats: StatsAggregator::new(products.clone()),
            products,
            orders,
            users,
            cache,
            latest_transactions_limit,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the wall clock, e.g. to pin the reference month in tests.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        read_through(self.cache.as_ref(), ADMIN_STATS_KEY, || self.compute_stats()).await
    }

    pub async fn pie_charts(&self) -> Result<PieCharts> {
        read_through(self.cache.as_ref(), ADMIN_PIE_CHARTS_KEY, || {
            self.compute_pie_charts()
        })
        .await
    }

    pub async fn bar_charts(&self) -> Result<BarCharts> {
        read_through(self.cache.as_ref(), ADMIN_BAR_CHARTS_KEY, || {
            self.compute_bar_charts()
        })
        .await
    }

    pub async fn line_charts(&self) -> Result<LineCharts> {
        read_through(self.cache.as_ref(), ADMIN_LINE_CHARTS_KEY, || {
            self.compute_line_charts()
        })
        .await
    }

    async fn compute_stats(&self) -> Result<DashboardStats> {
        let now = (self.clock)();
        let today = now.date_naive();
        let this_month = DateRange::month_to_date(today);
        let last_month = DateRange::previous_month(today);
        let summary = DateRange::trailing_months(today, SUMMARY_MONTHS);

        let (
            this_month_products,
            last_month_products,
            this_month_users,
            last_month_users,
            this_month_orders,
            last_month_orders,
            product_count,
            user_count,
            all_orders,
            summary_orders,
            categories,
            users,
        ) = tokio::try_join!(
            self.products.products_created_in(this_month),
            self.products.products_created_in(last_month),
            self.users.users_created_in(this_month),
            self.users.users_created_in(last_month),
            self.orders.orders_created_in(this_month),
            self.orders.orders_created_in(last_month),
            self.products.count_products(),
            self.users.count_users(),
            self.orders.list_orders(),
            self.orders.orders_created_in(summary),
            self.products.distinct_categories(),
            self.users.list_users(),
        )?;

        let change_percent = ChangePercent {
            revenue: percentage_change(
                total_revenue(&this_month_orders),
                total_revenue(&last_month_orders),
            ),
            product: percentage_change(
                this_month_products.len() as i64,
                last_month_products.len() as i64,
            ),
            user: percentage_change(this_month_users.len() as i64, last_month_users.len() as i64),
            order: percentage_change(
                this_month_orders.len() as i64,
                last_month_orders.len() as i64,
            ),
        };

        let count = DashboardCounts {
            revenue: total_revenue(&all_orders),
            product: product_count as i64,
            user: user_count as i64,
            order: all_orders.len() as i64,
        };

        let window = SUMMARY_MONTHS as usize;
        let chart = DashboardCharts {
            order: monthly_counts(window, &summary_orders, now),
            revenue: monthly_sums(window, &summary_orders, now, |o| o.total),
        };

        let stats = DashboardStats {
            category_count: self.category_shares(&categories, product_count).await?,
            change_percent,
            count,
            chart,
            user_ratio: gender_ratio(&users),
            latest_transaction: latest_transactions(&all_orders, self.latest_transactions_limit),
        };

        tracing::debug!(reference = %now, "Dashboard stats computed");
        Ok(stats)
    }

    async fn compute_pie_charts(&self) -> Result<PieCharts> {
        let today = (self.clock)().date_naive();

        let (orders, categories, product_count, out_of_stock, users) = tokio::try_join!(
            self.orders.list_orders(),
            self.products.distinct_categories(),
            self.products.count_products(),
            self.products.count_out_of_stock(),
            self.users.list_users(),
        )?;

        let gross_income = total_revenue(&orders);
        let discount = orders.iter().map(|o| o.discount).sum();

        Ok(PieCharts {
            order_fulfillment: order_fulfillment(&orders),
            product_categories: self.category_shares(&categories, product_count).await?,
            stock_availability: stock_availability(product_count, out_of_stock),
            revenue_distribution: revenue_distribution(gross_income, discount),
            users_age_group: age_groups(&users, today),
            admin_customer: admin_customer_split(&users),
        })
    }

    async fn compute_bar_charts(&self) -> Result<BarCharts> {
        let now = (self.clock)();
        let today = now.date_naive();
        let half_year = DateRange::trailing_months(today, SUMMARY_MONTHS);
        let year = DateRange::trailing_months(today, YEAR_MONTHS);

        let (products, users, orders) = tokio::try_join!(
            self.products.products_created_in(half_year),
            self.users.users_created_in(half_year),
            self.orders.orders_created_in(year),
        )?;

        Ok(BarCharts {
            products: monthly_counts(SUMMARY_MONTHS as usize, &products, now),
            users: monthly_counts(SUMMARY_MONTHS as usize, &users, now),
            orders: monthly_counts(YEAR_MONTHS as usize, &orders, now),
        })
    }

    async fn compute_line_charts(&self) -> Result<LineCharts> {
        let now = (self.clock)();
        let year = DateRange::trailing_months(now.date_naive(), YEAR_MONTHS);
        let window = YEAR_MONTHS as usize;

        let (products, users, orders) = tokio::try_join!(
            self.products.products_created_in(year),
            self.users.users_created_in(year),
            self.orders.orders_created_in(year),
        )?;

        Ok(LineCharts {
            users: monthly_counts(window, &users, now),
            products: monthly_counts(window, &products, now),
            discount: monthly_sums(window, &orders, now, |o| o.discount),
            revenue: monthly_sums(window, &orders, now, |o| o.total),
        })
    }

    /// An empty catalog charts as no categories rather than an error.
    async fn category_shares(
        &self,
        categories: &[String],
        product_count: u64,
    ) -> Result<Vec<CategoryShare>> {
        if product_count == 0 {
            return Ok(Vec::new());
        }
        self.stats.inventory_share(categories, product_count).await
    }
}
