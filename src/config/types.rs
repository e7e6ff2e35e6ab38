//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed tax-year structure that is
//! deserialized from YAML configuration files. The figures change every
//! April by law, so none of them are hard-coded in the calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Statutory figures for a single tax year.
///
/// # Example
///
/// ```
/// use maternity_pay::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::uk_2025_26();
/// assert_eq!(config.id, "2025-26");
/// assert_eq!(config.statutory_weekly_rate, Decimal::new(18403, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// Identifier of the tax year (e.g. "2025-26").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The capped statutory maternity pay weekly rate.
    pub statutory_weekly_rate: Decimal,
    /// Annual income tax personal allowance.
    pub annual_personal_allowance: Decimal,
    /// Weekly National Insurance primary threshold.
    pub ni_primary_threshold_weekly: Decimal,
    /// Employee pension contribution as a fraction of gross pay.
    pub pension_rate: Decimal,
    /// Basic rate of income tax.
    pub basic_tax_rate: Decimal,
    /// Employee National Insurance rate above the primary threshold.
    pub ni_rate: Decimal,
}

impl TaxYearConfig {
    /// Built-in figures for the 2025-26 tax year.
    pub fn uk_2025_26() -> Self {
        Self {
            id: "2025-26".to_string(),
            name: "UK tax year 2025-26".to_string(),
            statutory_weekly_rate: Decimal::new(18403, 2),
            annual_personal_allowance: Decimal::new(12570, 0),
            ni_primary_threshold_weekly: Decimal::new(242, 0),
            pension_rate: Decimal::new(74, 3),
            basic_tax_rate: Decimal::new(20, 2),
            ni_rate: Decimal::new(12, 2),
        }
    }

    /// The personal allowance spread evenly over 52 weeks.
    pub fn weekly_personal_allowance(&self) -> Decimal {
        self.annual_personal_allowance / Decimal::from(52)
    }

    /// Checks that amounts are non-negative and rates lie within `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let amounts = [
            ("statutory_weekly_rate", self.statutory_weekly_rate),
            ("annual_personal_allowance", self.annual_personal_allowance),
            ("ni_primary_threshold_weekly", self.ni_primary_threshold_weekly),
        ];
        for (field, value) in amounts {
            if value.is_sign_negative() {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        let rates = [
            ("pension_rate", self.pension_rate),
            ("basic_tax_rate", self.basic_tax_rate),
            ("ni_rate", self.ni_rate),
        ];
        for (field, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be between 0 and 1, got {}", value),
                });
            }
        }

        Ok(())
    }
}

impl Default for TaxYearConfig {
    fn default() -> Self {
        Self::uk_2025_26()
    }
}
