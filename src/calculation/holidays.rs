//! Holiday period lookup.

use chrono::NaiveDate;

use crate::models::{HolidayKind, HolidayPeriod};

/// Finds the holiday period containing the given date.
///
/// Periods are checked in list order and the first match wins.
///
/// # Example
///
/// ```
/// use maternity_pay::calculation::find_holiday;
/// use maternity_pay::models::{DateInterval, HolidayKind, HolidayPeriod};
/// use chrono::NaiveDate;
///
/// let easter = HolidayPeriod {
///     kind: HolidayKind::Easter,
///     interval: DateInterval::new(
///         NaiveDate::from_ymd_opt(2026, 3, 30).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 4, 17).unwrap(),
///     )
///     .unwrap(),
/// };
///
/// let monday = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();
/// assert_eq!(find_holiday(monday, &[easter]).map(|h| h.kind), Some(HolidayKind::Easter));
/// ```
pub fn find_holiday(date: NaiveDate, holidays: &[HolidayPeriod]) -> Option<&HolidayPeriod> {
    holidays.iter().find(|h| h.interval.contains(date))
}

/// Lists every pair of holiday periods that share at least one day.
pub fn overlapping_pairs(holidays: &[HolidayPeriod]) -> Vec<(HolidayKind, HolidayKind)> {
    let mut pairs = Vec::new();
    for (i, a) in holidays.iter().enumerate() {
        for b in &holidays[i + 1..] {
            if a.interval.overlaps(&b.interval) {
                pairs.push((a.kind, b.kind));
            }
        }
    }
    pairs
}
