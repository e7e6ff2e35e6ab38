//! Pay schedule construction.
//!
//! Builds the week-by-week schedule for a validated [`LeaveRequest`], comparing
//! the all-leave plan with the plan that returns to work for holiday periods.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxYearConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, CalculationMode, CalculationResult, LeaveRequest, LeaveRequestInput, PayPhase,
    WeekRecord,
};

use super::fixed_plan::calculate_fixed_plan;
use super::holidays::find_holiday;
use super::net_pay::apply_pay_basis;
use super::pay_scheme::evaluate_scheme;
use super::phase_segmentation::segment_phases;
use super::validation::validate_request;
use super::week_enumeration::enumerate_weeks;
use super::weekly_base::derive_weekly_base;

pub(crate) const LEAVE_STATUS: &str = "Maternity Leave";

/// Validates a raw request and calculates its schedule.
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::calculate;
/// use maternity_pay::config::TaxYearConfig;
/// use maternity_pay::models::LeaveRequestInput;
///
/// let input = LeaveRequestInput {
///     annual_salary: Some("41236".to_string()),
///     leave_start_date: Some("2025-10-06".to_string()),
///     pay_scheme: Some("4_2_12".to_string()),
///     eligibility: Some("both_eligible".to_string()),
///     ..Default::default()
/// };
///
/// let result = calculate(&input, &TaxYearConfig::uk_2025_26()).unwrap();
/// assert_eq!(result.weeks.len(), 52);
/// assert_eq!(result.gain, result.optimised_total - result.normal_total);
/// ```
pub fn calculate(
    input: &LeaveRequestInput,
    config: &TaxYearConfig,
) -> EngineResult<CalculationResult> {
    let request = validate_request(input)?;
    Ok(calculate_schedule(&request, config))
}

/// Calculates the pay schedule for a validated request.
///
/// Dispatches on `options.mode`. The result depends only on the request and
/// the tax year, so repeated calls return equal results.
pub fn calculate_schedule(request: &LeaveRequest, config: &TaxYearConfig) -> CalculationResult {
    let result = match request.options.mode {
        CalculationMode::SchemeDriven => scheme_driven_schedule(request, config),
        CalculationMode::FixedPhase => calculate_fixed_plan(request, config),
    };

    debug!(
        mode = ?result.mode,
        scheme = %request.pay_scheme,
        weeks = result.weeks.len(),
        phases = result.phases.len(),
        normal_total = %result.normal_total,
        optimised_total = %result.optimised_total,
        "Schedule calculated"
    );

    result
}

/// Evaluates the request's pay scheme week by week.
pub(crate) fn scheme_driven_schedule(
    request: &LeaveRequest,
    config: &TaxYearConfig,
) -> CalculationResult {
    let basis = request.options.pay_basis;
    let mut audit_trace = Vec::new();
    let mut step_number: u32 = 1;

    let base = derive_weekly_base(request.annual_salary, request.options.weekly_divisor, step_number);
    let weekly_base = base.weekly_base;
    let full_pay = apply_pay_basis(weekly_base, basis, config);
    audit_trace.push(base.audit_step);
    step_number += 1;

    let mondays = enumerate_weeks(request.leave_start_date, request.horizon_end());
    audit_trace.push(enumeration_step(request, &mondays, step_number));
    step_number += 1;

    let substitute = request.eligibility.allows_optimisation();
    let mut substituted = Vec::new();
    let weeks: Vec<WeekRecord> = mondays
        .iter()
        .zip(1u32..)
        .map(|(&monday, week_number)| {
            let pay = evaluate_scheme(request.pay_scheme, week_number, weekly_base, config);
            let standard_pay = apply_pay_basis(pay.gross, basis, config);
            let holiday = find_holiday(monday, &request.holidays);

            let optimised_pay = match holiday {
                Some(_) if substitute => {
                    substituted.push(week_number);
                    full_pay
                }
                _ => standard_pay,
            };
            let status = holiday
                .map(|h| h.kind.display_name())
                .unwrap_or(LEAVE_STATUS)
                .to_string();

            WeekRecord {
                week_number,
                week_start_date: monday,
                standard_pay,
                optimised_pay,
                pay_type: pay.pay_type,
                status,
            }
        })
        .collect();

    audit_trace.push(AuditStep {
        step_number,
        rule_id: "holiday_substitution".to_string(),
        rule_name: "Holiday Return Substitution".to_string(),
        input: serde_json::json!({
            "holidays": request.holidays,
            "eligibility": request.eligibility,
            "full_pay": full_pay.to_string()
        }),
        output: serde_json::json!({
            "substituted_weeks": substituted
        }),
        reasoning: if !substitute {
            format!(
                "Eligibility is {}: no holiday return plan, optimised pay equals standard pay",
                request.eligibility.id()
            )
        } else if substituted.is_empty() {
            "No leave week starts inside a holiday period".to_string()
        } else {
            format!(
                "{} week(s) start inside a holiday period and are paid at £{} instead",
                substituted.len(),
                full_pay.round_dp(2)
            )
        },
    });
    step_number += 1;

    let phases = segment_phases(&weeks);
    assemble_result(
        CalculationMode::SchemeDriven,
        phases,
        weeks,
        audit_trace,
        step_number,
    )
}

pub(crate) fn enumeration_step(
    request: &LeaveRequest,
    mondays: &[chrono::NaiveDate],
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "week_enumeration".to_string(),
        rule_name: "Leave Week Enumeration".to_string(),
        input: serde_json::json!({
            "leave_start_date": request.leave_start_date,
            "leave_end_date": request.horizon_end()
        }),
        output: serde_json::json!({
            "week_count": mondays.len(),
            "first_week": mondays.first(),
            "last_week": mondays.last()
        }),
        reasoning: match (mondays.first(), mondays.last()) {
            (Some(first), Some(last)) => format!(
                "{} weeks from Monday {} to Monday {}",
                mondays.len(),
                first,
                last
            ),
            _ => "No Monday falls inside the leave dates".to_string(),
        },
    }
}

/// Sums both plans and finishes the audit trace.
pub(crate) fn assemble_result(
    mode: CalculationMode,
    phases: Vec<PayPhase>,
    weeks: Vec<WeekRecord>,
    mut audit_trace: Vec<AuditStep>,
    step_number: u32,
) -> CalculationResult {
    let normal_total: Decimal = weeks.iter().map(|w| w.standard_pay).sum();
    let optimised_total: Decimal = weeks.iter().map(|w| w.optimised_pay).sum();
    let gain = optimised_total - normal_total;

    audit_trace.push(AuditStep {
        step_number,
        rule_id: "totals".to_string(),
        rule_name: "Schedule Totals".to_string(),
        input: serde_json::json!({
            "weeks": weeks.len(),
            "phases": phases.len()
        }),
        output: serde_json::json!({
            "normal_total": normal_total.to_string(),
            "optimised_total": optimised_total.to_string(),
            "gain": gain.to_string()
        }),
        reasoning: format!(
            "£{} - £{} = £{} gained by returning for holidays",
            optimised_total.round_dp(2),
            normal_total.round_dp(2),
            gain.round_dp(2)
        ),
    });

    CalculationResult {
        mode,
        phases,
        weeks,
        normal_total,
        optimised_total,
        gain,
        audit_trace,
    }
}
