//! Contractual pay scheme evaluation.
//!
//! Each scheme maps a week of leave to a gross amount and a [`PayType`]. All
//! schemes fall back to statutory pay until week 39 and pay nothing after.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;
use crate::models::{PayScheme, PayType};

use super::statutory::{STATUTORY_HIGHER_RATE_WEEKS, statutory_weekly_pay};

/// The last week of paid leave under any scheme.
pub const PAID_LEAVE_WEEKS: u32 = 39;

/// The gross pay for one week of leave and how it was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemePay {
    /// Gross weekly pay.
    pub gross: Decimal,
    /// The band the week falls in.
    pub pay_type: PayType,
}

/// Evaluates a pay scheme for a given week of leave.
///
/// # Arguments
///
/// * `scheme` - The contractual pay scheme
/// * `week` - The 1-indexed week of leave
/// * `weekly_base` - The weekly base salary
/// * `config` - The tax year supplying the statutory rate
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::evaluate_scheme;
/// use maternity_pay::config::TaxYearConfig;
/// use maternity_pay::models::{PayScheme, PayType};
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::uk_2025_26();
/// let base = Decimal::from(800);
///
/// let week_5 = evaluate_scheme(PayScheme::FourTwoTwelve, 5, base, &config);
/// assert_eq!(week_5.gross, Decimal::from(720));
/// assert_eq!(week_5.pay_type, PayType::NinetyPercent);
///
/// let week_10 = evaluate_scheme(PayScheme::FourTwoTwelve, 10, base, &config);
/// assert_eq!(week_10.gross, Decimal::new(58403, 2));
///
/// let week_40 = evaluate_scheme(PayScheme::FourTwoTwelve, 40, base, &config);
/// assert_eq!(week_40.pay_type, PayType::Unpaid);
/// ```
pub fn evaluate_scheme(
    scheme: PayScheme,
    week: u32,
    weekly_base: Decimal,
    config: &TaxYearConfig,
) -> SchemePay {
    let full = || SchemePay {
        gross: weekly_base,
        pay_type: PayType::FullPay,
    };
    let ninety_percent = || SchemePay {
        gross: weekly_base * Decimal::new(9, 1),
        pay_type: PayType::NinetyPercent,
    };
    let half = || SchemePay {
        gross: weekly_base * Decimal::new(5, 1),
        pay_type: PayType::HalfPay,
    };
    let half_plus_statutory = || SchemePay {
        gross: weekly_base * Decimal::new(5, 1) + statutory_weekly_pay(week, weekly_base, config),
        pay_type: PayType::HalfPayPlusStatutory,
    };
    let statutory = || SchemePay {
        gross: statutory_weekly_pay(week, weekly_base, config),
        pay_type: if week <= STATUTORY_HIGHER_RATE_WEEKS {
            PayType::StatutoryHigherRate
        } else {
            PayType::StatutoryOnly
        },
    };

    if week == 0 || week > PAID_LEAVE_WEEKS {
        return SchemePay {
            gross: Decimal::ZERO,
            pay_type: PayType::Unpaid,
        };
    }

    match scheme {
        PayScheme::FourTwoTwelve => match week {
            1..=4 => full(),
            5..=6 => ninety_percent(),
            7..=18 => half_plus_statutory(),
            _ => statutory(),
        },
        PayScheme::ThirteenWeeksFull => match week {
            1..=13 => full(),
            _ => statutory(),
        },
        PayScheme::SixTwelve => match week {
            1..=6 => full(),
            7..=18 => half_plus_statutory(),
            _ => statutory(),
        },
        PayScheme::Statutory => statutory(),
        PayScheme::TwentySixWeeksFull => match week {
            1..=26 => full(),
            _ => statutory(),
        },
        PayScheme::EighteenEight => match week {
            1..=18 => full(),
            19..=26 => half(),
            _ => statutory(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> TaxYearConfig {
        TaxYearConfig::uk_2025_26()
    }

    /// Pay types for weeks 1..=40, collapsed into (pay_type, first, last) runs.
    fn bands(scheme: PayScheme) -> Vec<(PayType, u32, u32)> {
        let mut runs: Vec<(PayType, u32, u32)> = Vec::new();
        for week in 1..=40 {
            let pay_type = evaluate_scheme(scheme, week, dec("793"), &config()).pay_type;
            match runs.last_mut() {
                Some(last) if last.0 == pay_type => last.2 = week,
                _ => runs.push((pay_type, week, week)),
            }
        }
        runs
    }

    #[test]
    fn test_four_two_twelve_bands() {
        assert_eq!(
            bands(PayScheme::FourTwoTwelve),
            vec![
                (PayType::FullPay, 1, 4),
                (PayType::NinetyPercent, 5, 6),
                (PayType::HalfPayPlusStatutory, 7, 18),
                (PayType::StatutoryOnly, 19, 39),
                (PayType::Unpaid, 40, 40),
            ]
        );
    }

    #[test]
    fn test_thirteen_weeks_full_bands() {
        assert_eq!(
            bands(PayScheme::ThirteenWeeksFull),
            vec![
                (PayType::FullPay, 1, 13),
                (PayType::StatutoryOnly, 14, 39),
                (PayType::Unpaid, 40, 40),
            ]
        );
    }

    #[test]
    fn test_six_twelve_bands() {
        assert_eq!(
            bands(PayScheme::SixTwelve),
            vec![
                (PayType::FullPay, 1, 6),
                (PayType::HalfPayPlusStatutory, 7, 18),
                (PayType::StatutoryOnly, 19, 39),
                (PayType::Unpaid, 40, 40),
            ]
        );
    }

    #[test]
    fn test_statutory_bands() {
        assert_eq!(
            bands(PayScheme::Statutory),
            vec![
                (PayType::StatutoryHigherRate, 1, 6),
                (PayType::StatutoryOnly, 7, 39),
                (PayType::Unpaid, 40, 40),
            ]
        );
    }

    #[test]
    fn test_twenty_six_weeks_full_bands() {
        assert_eq!(
            bands(PayScheme::TwentySixWeeksFull),
            vec![
                (PayType::FullPay, 1, 26),
                (PayType::StatutoryOnly, 27, 39),
                (PayType::Unpaid, 40, 40),
            ]
        );
    }

    #[test]
    fn test_eighteen_eight_bands() {
        assert_eq!(
            bands(PayScheme::EighteenEight),
            vec![
                (PayType::FullPay, 1, 18),
                (PayType::HalfPay, 19, 26),
                (PayType::StatutoryOnly, 27, 39),
                (PayType::Unpaid, 40, 40),
            ]
        );
    }

    #[test]
    fn test_statutory_scheme_week_one_and_seven() {
        let base = dec("41236") / dec("52");
        let week_1 = evaluate_scheme(PayScheme::Statutory, 1, base, &config());
        let week_7 = evaluate_scheme(PayScheme::Statutory, 7, base, &config());
        assert_eq!(week_1.gross, dec("184.03"));
        assert_eq!(week_7.gross, dec("184.03"));
    }

    #[test]
    fn test_twenty_six_weeks_full_week_20_and_30() {
        let base = dec("793");
        let week_20 = evaluate_scheme(PayScheme::TwentySixWeeksFull, 20, base, &config());
        let week_30 = evaluate_scheme(PayScheme::TwentySixWeeksFull, 30, base, &config());
        assert_eq!(week_20.gross, base);
        assert_eq!(week_30.gross, dec("184.03"));
        assert_eq!(week_30.pay_type, PayType::StatutoryOnly);
    }

    #[test]
    fn test_half_pay_plus_statutory_amount() {
        let pay = evaluate_scheme(PayScheme::SixTwelve, 7, dec("793"), &config());
        assert_eq!(pay.gross, dec("580.53"));
    }

    #[test]
    fn test_eighteen_eight_half_pay_has_no_statutory_top_up() {
        let pay = evaluate_scheme(PayScheme::EighteenEight, 19, dec("793"), &config());
        assert_eq!(pay.gross, dec("396.5"));
    }

    #[test]
    fn test_week_zero_is_unpaid() {
        let pay = evaluate_scheme(PayScheme::TwentySixWeeksFull, 0, dec("793"), &config());
        assert_eq!(pay.gross, Decimal::ZERO);
    }
}
