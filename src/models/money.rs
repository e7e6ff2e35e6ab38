//! Rounding of monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole pence, halves away from zero.
///
/// Only presentation boundaries round; running totals keep full precision.
///
/// # Example
///
/// ```
/// use maternity_pay::models::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// assert_eq!(round_money(Decimal::new(12344, 3)), Decimal::new(1234, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
