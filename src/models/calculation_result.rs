//! Calculation result models for the maternity pay planner.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: pay phases, week records and the audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leave_request::CalculationMode;
use super::money::round_money;

/// How a single leave week is paid.
///
/// # Example
///
/// ```
/// use maternity_pay::models::PayType;
///
/// assert_eq!(PayType::HalfPayPlusStatutory.label(), "50% Pay + SMP");
/// assert_eq!(serde_json::to_string(&PayType::StatutoryOnly).unwrap(), "\"statutory_only\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// 100% of the weekly base.
    FullPay,
    /// 90% of the weekly base.
    NinetyPercent,
    /// 50% of the weekly base plus statutory pay.
    HalfPayPlusStatutory,
    /// 50% of the weekly base.
    HalfPay,
    /// Statutory pay during the first six weeks (90% of base, capped).
    StatutoryHigherRate,
    /// Statutory pay at the flat weekly rate.
    StatutoryOnly,
    /// Back at work for a holiday period on full pay.
    HolidayFullPay,
    /// Statutory shared parental pay.
    SharedParental,
    /// No pay.
    Unpaid,
}

impl PayType {
    /// The human-readable label used for phases.
    pub fn label(&self) -> &'static str {
        match self {
            PayType::FullPay => "100% Pay",
            PayType::NinetyPercent => "90% Pay",
            PayType::HalfPayPlusStatutory => "50% Pay + SMP",
            PayType::HalfPay => "50% Pay",
            PayType::StatutoryHigherRate => "SMP (90%, capped)",
            PayType::StatutoryOnly => "SMP Only",
            PayType::HolidayFullPay => "Full Pay (holiday)",
            PayType::SharedParental => "ShPP",
            PayType::Unpaid => "Unpaid",
        }
    }
}

impl std::fmt::Display for PayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A run of consecutive weeks paid the same way.
///
/// # Example
///
/// ```
/// use maternity_pay::models::{PayPhase, PayType};
/// use rust_decimal::Decimal;
///
/// let phase = PayPhase::new("SMP Only", PayType::StatutoryOnly, 19, 21, Decimal::new(18403, 2));
/// assert_eq!(phase.last_week, 39);
/// assert_eq!(phase.total_net, Decimal::new(386463, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPhase {
    /// Display label of the phase.
    pub label: String,
    /// How weeks in this phase are paid.
    pub pay_type: PayType,
    /// The first week number in the phase.
    pub first_week: u32,
    /// The last week number in the phase (`first_week - 1` when empty).
    pub last_week: u32,
    /// The number of weeks in the phase.
    pub week_count: u32,
    /// Pay for one week of the phase.
    pub weekly_net: Decimal,
    /// `weekly_net * week_count`, rounded to pence.
    pub total_net: Decimal,
}

impl PayPhase {
    /// Creates a phase, deriving its last week and total.
    pub fn new(
        label: impl Into<String>,
        pay_type: PayType,
        first_week: u32,
        week_count: u32,
        weekly_net: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            pay_type,
            first_week,
            last_week: (first_week + week_count).saturating_sub(1),
            week_count,
            weekly_net,
            total_net: round_money(weekly_net * Decimal::from(week_count)),
        }
    }
}

/// One calendar week of the leave horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    /// 1-indexed position in the horizon.
    pub week_number: u32,
    /// The Monday the week starts on.
    pub week_start_date: NaiveDate,
    /// Pay under the all-leave plan.
    pub standard_pay: Decimal,
    /// Pay under the holiday-return plan.
    pub optimised_pay: Decimal,
    /// How the week is paid under the plan the phases describe.
    pub pay_type: PayType,
    /// Holiday name, or what the employee is doing that week.
    pub status: String,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Totals rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Number of weeks in the horizon.
    pub weeks: u32,
    /// Total pay under the all-leave plan.
    pub normal_total: Decimal,
    /// Total pay under the holiday-return plan.
    pub optimised_total: Decimal,
    /// Extra take-home from the holiday-return plan.
    pub gain: Decimal,
}

/// The complete result of a schedule calculation.
///
/// Holds no timestamps or ids, so identical requests produce identical results.
///
/// Invariants:
/// - `gain == optimised_total - normal_total`
/// - `normal_total` is the sum of every week's `standard_pay`
/// - `optimised_total` is the sum of every week's `optimised_pay`
/// - phase week counts sum to `weeks.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Which calculation variant produced the result.
    pub mode: CalculationMode,
    /// Consecutive pay phases covering the horizon.
    pub phases: Vec<PayPhase>,
    /// One record per week, ascending.
    pub weeks: Vec<WeekRecord>,
    /// Total pay under the all-leave plan.
    pub normal_total: Decimal,
    /// Total pay under the holiday-return plan.
    pub optimised_total: Decimal,
    /// `optimised_total - normal_total`.
    pub gain: Decimal,
    /// How the result was reached.
    pub audit_trace: Vec<AuditStep>,
}

impl CalculationResult {
    /// The totals rounded to pence.
    ///
    /// The gain is taken from the rounded totals so the summary stays
    /// internally consistent.
    pub fn summary(&self) -> ResultSummary {
        let normal_total = round_money(self.normal_total);
        let optimised_total = round_money(self.optimised_total);
        ResultSummary {
            weeks: u32::try_from(self.weeks.len()).unwrap_or(u32::MAX),
            normal_total,
            optimised_total,
            gain: optimised_total - normal_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_phase_total_is_rounded_product() {
        let phase = PayPhase::new("100% Pay", PayType::FullPay, 1, 4, dec("838.596153846"));
        assert_eq!(phase.total_net, dec("3354.38"));
        assert_eq!(phase.last_week, 4);
    }

    #[test]
    fn test_empty_phase_ends_before_it_starts() {
        let phase = PayPhase::new("Easter (full pay)", PayType::HolidayFullPay, 26, 0, dec("793"));
        assert_eq!(phase.last_week, 25);
        assert_eq!(phase.total_net, Decimal::ZERO);
    }

    #[test]
    fn test_pay_type_deserialization() {
        let pay_type: PayType = serde_json::from_str("\"half_pay_plus_statutory\"").unwrap();
        assert_eq!(pay_type, PayType::HalfPayPlusStatutory);
    }

    #[test]
    fn test_week_record_serialization() {
        let week = WeekRecord {
            week_number: 1,
            week_start_date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
            standard_pay: dec("184.03"),
            optimised_pay: dec("184.03"),
            pay_type: PayType::StatutoryHigherRate,
            status: "Maternity Leave".to_string(),
        };
        let json = serde_json::to_string(&week).unwrap();
        assert!(json.contains("\"week_start_date\":\"2025-10-06\""));
        assert!(json.contains("\"standard_pay\":\"184.03\""));
        assert!(json.contains("\"pay_type\":\"statutory_higher_rate\""));
    }

    #[test]
    fn test_summary_rounds_totals() {
        let result = CalculationResult {
            mode: CalculationMode::SchemeDriven,
            phases: vec![],
            weeks: vec![],
            normal_total: dec("100.005"),
            optimised_total: dec("150.0149"),
            gain: dec("50.0099"),
            audit_trace: vec![],
        };
        let summary = result.summary();
        assert_eq!(summary.normal_total, dec("100.01"));
        assert_eq!(summary.optimised_total, dec("150.01"));
        assert_eq!(summary.gain, dec("50.00"));
        assert_eq!(summary.weeks, 0);
    }

    #[test]
    fn test_summary_gain_matches_rounded_totals() {
        // 16905.914 - 15150.225 = 1755.689, but the rounded totals differ by 1755.68
        let result = CalculationResult {
            mode: CalculationMode::SchemeDriven,
            phases: vec![],
            weeks: vec![],
            normal_total: dec("15150.225"),
            optimised_total: dec("16905.914"),
            gain: dec("1755.689"),
            audit_trace: vec![],
        };
        let summary = result.summary();
        assert_eq!(summary.normal_total, dec("15150.23"));
        assert_eq!(summary.optimised_total, dec("16905.91"));
        assert_eq!(summary.gain, dec("1755.68"));
        assert_eq!(summary.gain, summary.optimised_total - summary.normal_total);
    }
}
