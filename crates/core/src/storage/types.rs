use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

/// A date range with inclusive start and end dates, used to select documents
/// by their creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a date range for an entire month.
    ///
    /// # Panics
    /// Panics if the year/month combination is invalid.
    pub fn month(year: i32, month: u32) -> Self {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .expect("Invalid year/month for DateRange::month");

        // Get the last day of the month by going to the first of next month and subtracting a day
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .expect("Invalid year/month for DateRange::month end calculation")
        .pred_opt()
        .expect("Failed to get last day of month");

        Self { start, end }
    }

    /// From the first day of `today`'s month up to and including `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start: first_of_month(today),
            end: today,
        }
    }

    /// The whole calendar month before `today`'s month.
    pub fn previous_month(today: NaiveDate) -> Self {
        let last_month = first_of_month(today) - Months::new(1);
        Self::month(last_month.year(), last_month.month())
    }

    /// The `months` calendar months ending with `today`'s month, cut off at
    /// `today`. `trailing_months(today, 1)` equals `month_to_date(today)`.
    pub fn trailing_months(today: NaiveDate, months: u32) -> Self {
        let back = months.saturating_sub(1);
        Self {
            start: first_of_month(today) - Months::new(back),
            end: today,
        }
    }

    /// Returns true if `timestamp` falls on a day inside this range.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        self.start <= date && date <= self.end
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
