//! Statutory maternity pay.
//!
//! For the first six weeks statutory pay is 90% of the weekly base, capped at
//! the flat rate; from week 7 it is the flat rate for the tax year.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;

/// Weeks at the start of leave paid at the earnings-related rate.
pub const STATUTORY_HIGHER_RATE_WEEKS: u32 = 6;

/// The earnings-related fraction of the weekly base (90%).
pub fn statutory_higher_rate_fraction() -> Decimal {
    Decimal::new(9, 1)
}

/// Returns statutory pay for the given week of leave.
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::statutory_weekly_pay;
/// use maternity_pay::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::uk_2025_26();
///
/// // 90% of £150 is below the cap
/// assert_eq!(statutory_weekly_pay(1, Decimal::from(150), &config), Decimal::from(135));
/// // From week 7 the flat rate applies
/// assert_eq!(statutory_weekly_pay(7, Decimal::from(150), &config), Decimal::new(18403, 2));
/// ```
pub fn statutory_weekly_pay(week: u32, weekly_base: Decimal, config: &TaxYearConfig) -> Decimal {
    if week <= STATUTORY_HIGHER_RATE_WEEKS {
        (weekly_base * statutory_higher_rate_fraction()).min(config.statutory_weekly_rate)
    } else {
        config.statutory_weekly_rate
    }
}
