//! Weekly base salary derivation.
//!
//! Every pay band is a fraction of the weekly base, so this is the first step
//! of each calculation.

use rust_decimal::Decimal;

use crate::models::{AuditStep, WeeklyDivisor};

/// The result of deriving the weekly base, including the audit step.
#[derive(Debug, Clone)]
pub struct WeeklyBaseResult {
    /// Annual salary divided by the selected divisor, unrounded.
    pub weekly_base: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the weekly base salary from the annual salary.
///
/// # Arguments
///
/// * `annual_salary` - The gross annual salary
/// * `divisor` - Weeks per year to divide by
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::derive_weekly_base;
/// use maternity_pay::models::WeeklyDivisor;
/// use rust_decimal::Decimal;
///
/// let result = derive_weekly_base(Decimal::from(41236), WeeklyDivisor::FiftyTwo, 1);
/// assert_eq!(result.weekly_base, Decimal::from(793));
/// assert_eq!(result.audit_step.rule_id, "weekly_base");
/// ```
pub fn derive_weekly_base(
    annual_salary: Decimal,
    divisor: WeeklyDivisor,
    step_number: u32,
) -> WeeklyBaseResult {
    let divisor_value = divisor.value();
    let weekly_base = annual_salary / divisor_value;

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_base".to_string(),
        rule_name: "Weekly Base Salary".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.to_string(),
            "divisor": divisor_value.to_string()
        }),
        output: serde_json::json!({
            "weekly_base": weekly_base.to_string()
        }),
        reasoning: format!(
            "£{} / {} = £{} per week",
            annual_salary.normalize(),
            divisor_value,
            weekly_base.round_dp(2)
        ),
    };

    WeeklyBaseResult {
        weekly_base,
        audit_step,
    }
}
