//! Week enumeration over the leave horizon.
//!
//! Weeks run Monday to Sunday. The first week is the one starting on the
//! first Monday on or after the leave start date.

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the given date if it is a Monday, otherwise the next Monday.
///
/// # Example
///
/// ```
/// use maternity_pay::calculation::first_monday_on_or_after;
/// use chrono::NaiveDate;
///
/// // 2025-10-08 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2025, 10, 8).unwrap();
/// assert_eq!(
///     first_monday_on_or_after(wednesday),
///     NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()
/// );
/// ```
pub fn first_monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let days_until_monday = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(days_until_monday))
}

/// Lists the Monday of every week from the first Monday on or after `start`
/// up to and including `end`.
///
/// Returns an empty list when no Monday falls in the range.
///
/// # Example
///
/// ```
/// use maternity_pay::calculation::enumerate_weeks;
/// use maternity_pay::models::default_leave_end;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
/// let weeks = enumerate_weeks(start, default_leave_end(start));
/// assert_eq!(weeks.len(), 52);
/// assert_eq!(weeks[0], start);
/// ```
pub fn enumerate_weeks(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut mondays = Vec::new();
    let mut current = first_monday_on_or_after(start);
    while current <= end {
        mondays.push(current);
        current += Duration::weeks(1);
    }
    mondays
}
