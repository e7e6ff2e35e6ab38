//! Net pay after pension, income tax and National Insurance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxYearConfig;
use crate::models::{PayBasis, round_money};

/// The deductions taken from one week of gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPayBreakdown {
    /// Gross weekly pay.
    pub gross: Decimal,
    /// Employee pension contribution.
    pub pension: Decimal,
    /// Basic-rate income tax.
    pub income_tax: Decimal,
    /// Employee National Insurance.
    pub national_insurance: Decimal,
    /// Take-home pay, rounded to pence.
    pub net: Decimal,
}

/// Calculates weekly take-home pay.
///
/// Deductions apply in order: pension on gross; income tax on gross less
/// pension less the weekly personal allowance; National Insurance on gross
/// above the primary threshold. Taxable amounts never go below zero.
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::calculate_net_pay;
/// use maternity_pay::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_net_pay(Decimal::from(793), &TaxYearConfig::uk_2025_26());
/// assert_eq!(breakdown.pension, Decimal::new(58682, 3));
/// assert_eq!(breakdown.national_insurance, Decimal::new(6612, 2));
/// assert_eq!(breakdown.net, Decimal::new(56968, 2));
/// ```
pub fn calculate_net_pay(gross: Decimal, config: &TaxYearConfig) -> NetPayBreakdown {
    let pension = gross * config.pension_rate;
    let taxable = (gross - pension - config.weekly_personal_allowance()).max(Decimal::ZERO);
    let income_tax = taxable * config.basic_tax_rate;
    let ni_earnings = (gross - config.ni_primary_threshold_weekly).max(Decimal::ZERO);
    let national_insurance = ni_earnings * config.ni_rate;
    let net = round_money(gross - pension - income_tax - national_insurance);

    NetPayBreakdown {
        gross,
        pension,
        income_tax,
        national_insurance,
        net,
    }
}

/// Expresses a gross weekly amount in the requested pay basis.
pub fn apply_pay_basis(gross: Decimal, basis: PayBasis, config: &TaxYearConfig) -> Decimal {
    match basis {
        PayBasis::Gross => gross,
        PayBasis::Net => calculate_net_pay(gross, config).net,
    }
}
