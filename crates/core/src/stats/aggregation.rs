//! Pure aggregation functions behind the admin dashboard.

use chrono::{DateTime, Datelike, Utc};

use crate::catalog::{Order, Product, User};

use super::error::StatsError;

/// Anything carrying a creation timestamp can be bucketed by month.
pub trait Dated {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Dated for Product {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Dated for Order {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Dated for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Relative change from `previous` to `current`, in whole percent.
///
/// A zero `previous` yields `current * 100` instead of dividing by zero, so
/// growth from nothing reads as a large positive number and `(0, 0)` reads
/// as no change.
///
/// This is not the plain ratio `current / previous * 100`, which earlier
/// versions of the dashboard reported (150 against 100 showed as 150). The
/// same pair gives 50 here and an unchanged month gives 0.
pub fn percentage_change(current: i64, previous: i64) -> i64 {
    if previous == 0 {
        return current * 100;
    }
    let percent = (current - previous) as f64 / previous as f64 * 100.0;
    percent.round() as i64
}

/// Share of `count` in `total`, in whole percent.
pub fn share_percent(count: u64, total: u64) -> Result<i64, StatsError> {
    if total == 0 {
        return Err(StatsError::EmptyInventory);
    }
    Ok((count as f64 / total as f64 * 100.0).round() as i64)
}

/// Calendar-month distance from `created` back to `reference`, in `0..12`.
///
/// Only the month of year is compared. A record from twelve months before
/// `reference` lands on distance 0, the same as one from the reference
/// month itself; callers restrict `records` to the window they chart.
pub fn month_diff(reference: DateTime<Utc>, created: DateTime<Utc>) -> u32 {
    (reference.month0() + 12 - created.month0()) % 12
}

/// Folds `records` into a fixed-length series of trailing calendar months.
///
/// Index `window_length - 1` is the reference month and index 0 is
/// `window_length - 1` months before it. Each record adds `property(record)`
/// when a property is given, otherwise 1. Records whose [`month_diff`] falls
/// outside the window contribute nothing.
pub fn monthly_buckets<R: Dated>(
    window_length: usize,
    records: &[R],
    reference: DateTime<Utc>,
    property: Option<&dyn Fn(&R) -> i64>,
) -> Vec<i64> {
    let mut buckets = vec![0; window_length];

    for record in records {
        let diff = month_diff(reference, record.created_at()) as usize;
        if diff < window_length {
            let value = property.map_or(1, |p| p(record));
            buckets[window_length - diff - 1] += value;
        }
    }

    buckets
}

/// Record count per trailing month.
pub fn monthly_counts<R: Dated>(
    window_length: usize,
    records: &[R],
    reference: DateTime<Utc>,
) -> Vec<i64> {
    monthly_buckets(window_length, records, reference, None)
}

/// Sum of `property` per trailing month.
pub fn monthly_sums<R: Dated>(
    window_length: usize,
    records: &[R],
    reference: DateTime<Utc>,
    property: impl Fn(&R) -> i64,
) -> Vec<i64> {
    let property: &dyn Fn(&R) -> i64 = &property;
    monthly_buckets(window_length, records, reference, Some(property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn order_at(created: DateTime<Utc>, total: i64) -> Order {
        Order::new("u1", Vec::new())
            .with_total(total)
            .with_created_at(created)
    }

    #[test]
    fn test_percentage_change_zero_previous() {
        assert_eq!(percentage_change(0, 0), 0);
        assert_eq!(percentage_change(50, 0), 5000);
    }

    #[test]
    fn test_percentage_change_growth_and_decline() {
        assert_eq!(percentage_change(150, 100), 50);
        assert_eq!(percentage_change(80, 100), -20);
        assert_eq!(percentage_change(100, 100), 0);
        assert_eq!(percentage_change(1, 3), -67);
    }

    #[test]
    fn test_share_percent_rounds() {
        assert_eq!(share_percent(1, 3), Ok(33));
        assert_eq!(share_percent(2, 3), Ok(67));
        assert_eq!(share_percent(4, 4), Ok(100));
        assert_eq!(share_percent(0, 4), Ok(0));
    }

    #[test]
    fn test_share_percent_rejects_zero_total() {
        assert_eq!(share_percent(0, 0), Err(StatsError::EmptyInventory));
    }

    #[test]
    fn test_same_month_lands_in_last_bucket() {
        // July has month index 6.
        let reference = at(2024, 7, 20);
        let orders = vec![order_at(at(2024, 7, 1), 0)];

        let buckets = monthly_counts(12, &orders, reference);

        assert_eq!(buckets.len(), 12);
        assert_eq!(buckets[11], 1);
        assert_eq!(buckets.iter().sum::<i64>(), 1);
    }

    #[test]
    fn test_previous_month_lands_in_second_to_last_bucket() {
        let reference = at(2024, 7, 20);
        let orders = vec![order_at(at(2024, 6, 30), 0)];

        let buckets = monthly_counts(12, &orders, reference);

        assert_eq!(buckets[10], 1);
    }

    #[test]
    fn test_out_of_window_contributes_nothing() {
        let reference = at(2024, 7, 20);
        // month_diff 6 and 9 respectively
        let orders = vec![order_at(at(2024, 1, 5), 0), order_at(at(2023, 10, 5), 0)];

        let buckets = monthly_counts(6, &orders, reference);

        assert_eq!(buckets, vec![0; 6]);
    }

    #[test]
    fn test_window_edge_is_index_zero() {
        let reference = at(2024, 7, 20);
        let orders = vec![order_at(at(2024, 2, 5), 0)];

        let buckets = monthly_counts(6, &orders, reference);

        assert_eq!(buckets, vec![1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_year_wraparound() {
        let reference = at(2025, 2, 10);
        let orders = vec![
            order_at(at(2024, 12, 31), 0),
            order_at(at(2024, 11, 1), 0),
            order_at(at(2025, 1, 15), 0),
        ];

        assert_eq!(month_diff(reference, at(2024, 12, 31)), 2);
        let buckets = monthly_counts(6, &orders, reference);
        assert_eq!(buckets, vec![0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_twelve_months_ago_collapses_onto_current_month() {
        let reference = at(2024, 7, 20);
        let orders = vec![order_at(at(2023, 7, 20), 0), order_at(at(2024, 7, 1), 0)];

        assert_eq!(month_diff(reference, at(2023, 7, 20)), 0);
        let buckets = monthly_counts(12, &orders, reference);
        assert_eq!(buckets[11], 2);
    }

    #[test]
    fn test_property_values_are_summed() {
        let reference = at(2024, 3, 15);
        let orders = vec![
            order_at(at(2024, 3, 1), 100),
            order_at(at(2024, 3, 2), 50),
            order_at(at(2024, 2, 2), 30),
        ];

        let buckets = monthly_sums(3, &orders, reference, |o: &Order| o.total);

        assert_eq!(buckets, vec![0, 30, 150]);
    }

    #[test]
    fn test_zero_length_window() {
        let reference = at(2024, 3, 15);
        let orders = vec![order_at(at(2024, 3, 1), 100)];
        assert!(monthly_counts(0, &orders, reference).is_empty());
    }
}
