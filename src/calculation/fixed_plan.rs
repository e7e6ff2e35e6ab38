//! Fixed maternity-plus-shared-parental plan.
//!
//! Occupational maternity pay runs for 25 weeks, then the remaining leave is
//! split into shared parental leave blocks with a return to work for each
//! holiday period in between. The plan does not depend on the pay scheme; the
//! standard column of each week is the 4-2-12 scheme for comparison.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;
use crate::models::{
    AuditStep, CalculationMode, CalculationResult, HolidayKind, LeaveRequest, PayPhase,
    PayScheme, PayType, WeekRecord,
};

use super::net_pay::apply_pay_basis;
use super::pay_scheme::evaluate_scheme;
use super::schedule::{LEAVE_STATUS, assemble_result, enumeration_step, scheme_driven_schedule};
use super::week_enumeration::enumerate_weeks;
use super::weekly_base::derive_weekly_base;

const SHARED_PARENTAL_STATUS: &str = "Shared Parental Leave";

/// How long a planned phase runs.
#[derive(Debug, Clone, Copy)]
enum PhaseLength {
    Weeks(u32),
    Holiday(HolidayKind),
    Remainder,
}

/// What a planned phase pays, before the pay basis is applied.
#[derive(Debug, Clone, Copy)]
enum PhaseRate {
    Base,
    NinetyPercent,
    HalfPlusStatutory,
    Statutory,
}

struct PlannedPhase {
    label: &'static str,
    pay_type: PayType,
    length: PhaseLength,
    rate: PhaseRate,
}

const PLAN: [PlannedPhase; 10] = [
    PlannedPhase {
        label: "OMP full",
        pay_type: PayType::FullPay,
        length: PhaseLength::Weeks(4),
        rate: PhaseRate::Base,
    },
    PlannedPhase {
        label: "OMP 90%",
        pay_type: PayType::NinetyPercent,
        length: PhaseLength::Weeks(2),
        rate: PhaseRate::NinetyPercent,
    },
    PlannedPhase {
        label: "OMP ½ + SMP",
        pay_type: PayType::HalfPayPlusStatutory,
        length: PhaseLength::Weeks(12),
        rate: PhaseRate::HalfPlusStatutory,
    },
    PlannedPhase {
        label: "SMP",
        pay_type: PayType::StatutoryOnly,
        length: PhaseLength::Weeks(7),
        rate: PhaseRate::Statutory,
    },
    PlannedPhase {
        label: "Easter (full pay)",
        pay_type: PayType::HolidayFullPay,
        length: PhaseLength::Holiday(HolidayKind::Easter),
        rate: PhaseRate::Base,
    },
    PlannedPhase {
        label: "SPL 1 – ShPP",
        pay_type: PayType::SharedParental,
        length: PhaseLength::Weeks(5),
        rate: PhaseRate::Statutory,
    },
    PlannedPhase {
        label: "May (full pay)",
        pay_type: PayType::HolidayFullPay,
        length: PhaseLength::Holiday(HolidayKind::MidYear),
        rate: PhaseRate::Base,
    },
    PlannedPhase {
        label: "SPL 2 – ShPP",
        pay_type: PayType::SharedParental,
        length: PhaseLength::Weeks(7),
        rate: PhaseRate::Statutory,
    },
    PlannedPhase {
        label: "Summer (full pay)",
        pay_type: PayType::HolidayFullPay,
        length: PhaseLength::Holiday(HolidayKind::Summer),
        rate: PhaseRate::Base,
    },
    PlannedPhase {
        label: "SPL 3 – ShPP",
        pay_type: PayType::SharedParental,
        length: PhaseLength::Remainder,
        rate: PhaseRate::Statutory,
    },
];

/// Calculates the fixed-phase plan for a validated request.
///
/// Phases are allocated in order and each is cut short once the horizon is
/// used up, so the phase week counts always sum to the number of weeks. A
/// holiday the request does not configure gives an empty phase.
///
/// When shared parental leave is not available the plan cannot be followed,
/// and the 4-2-12 schedule without holiday returns is produced instead.
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::calculate_fixed_plan;
/// use maternity_pay::config::TaxYearConfig;
/// use maternity_pay::models::{
///     CalculationMode, CalculationOptions, Eligibility, LeaveRequest, PayScheme,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = LeaveRequest {
///     annual_salary: Decimal::from(41236),
///     leave_start_date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
///     leave_end_date: None,
///     pay_scheme: PayScheme::Statutory,
///     holidays: vec![],
///     eligibility: Eligibility::BothEligible,
///     options: CalculationOptions {
///         mode: CalculationMode::FixedPhase,
///         ..Default::default()
///     },
/// };
///
/// let result = calculate_fixed_plan(&request, &TaxYearConfig::uk_2025_26());
/// assert_eq!(result.phases.len(), 10);
/// assert_eq!(result.phases[9].week_count, 52 - 4 - 2 - 12 - 7 - 5 - 7);
/// ```
pub fn calculate_fixed_plan(request: &LeaveRequest, config: &TaxYearConfig) -> CalculationResult {
    if !request.eligibility.allows_optimisation() {
        return fallback_schedule(request, config);
    }

    let basis = request.options.pay_basis;
    let mut audit_trace = Vec::new();
    let mut step_number: u32 = 1;

    let base = derive_weekly_base(request.annual_salary, request.options.weekly_divisor, step_number);
    let weekly_base = base.weekly_base;
    audit_trace.push(base.audit_step);
    step_number += 1;

    let mondays = enumerate_weeks(request.leave_start_date, request.horizon_end());
    audit_trace.push(enumeration_step(request, &mondays, step_number));
    step_number += 1;

    let horizon = u32::try_from(mondays.len()).unwrap_or(u32::MAX);
    let mut phases = Vec::with_capacity(PLAN.len());
    let mut next_week: u32 = 1;
    for planned in &PLAN {
        let remaining = horizon - (next_week - 1);
        let week_count = match planned.length {
            PhaseLength::Weeks(weeks) => weeks.min(remaining),
            PhaseLength::Holiday(kind) => holiday_weeks(request, kind).min(remaining),
            PhaseLength::Remainder => remaining,
        };
        let gross = phase_gross(planned.rate, weekly_base, config);
        phases.push(PayPhase::new(
            planned.label,
            planned.pay_type,
            next_week,
            week_count,
            apply_pay_basis(gross, basis, config),
        ));
        next_week += week_count;
    }

    audit_trace.push(AuditStep {
        step_number,
        rule_id: "fixed_phase_plan".to_string(),
        rule_name: "Fixed Maternity and Shared Parental Plan".to_string(),
        input: serde_json::json!({
            "horizon_weeks": horizon,
            "holidays": request.holidays
        }),
        output: serde_json::Value::Array(
            phases
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "label": p.label,
                        "weeks": p.week_count,
                        "weekly": p.weekly_net.to_string()
                    })
                })
                .collect(),
        ),
        reasoning: format!(
            "{} weeks allocated across {} planned phases",
            horizon,
            PLAN.len()
        ),
    });
    step_number += 1;

    let weeks: Vec<WeekRecord> = mondays
        .iter()
        .zip(1u32..)
        .filter_map(|(&monday, week_number)| {
            let phase = phases
                .iter()
                .find(|p| p.week_count > 0 && (p.first_week..=p.last_week).contains(&week_number))?;
            let standard = evaluate_scheme(PayScheme::FourTwoTwelve, week_number, weekly_base, config);
            Some(WeekRecord {
                week_number,
                week_start_date: monday,
                standard_pay: apply_pay_basis(standard.gross, basis, config),
                optimised_pay: phase.weekly_net,
                pay_type: phase.pay_type,
                status: week_status(request, phase.pay_type, monday),
            })
        })
        .collect();

    assemble_result(
        CalculationMode::FixedPhase,
        phases,
        weeks,
        audit_trace,
        step_number,
    )
}

fn fallback_schedule(request: &LeaveRequest, config: &TaxYearConfig) -> CalculationResult {
    let comparison = LeaveRequest {
        pay_scheme: PayScheme::FourTwoTwelve,
        ..request.clone()
    };
    let mut result = scheme_driven_schedule(&comparison, config);
    result.mode = CalculationMode::FixedPhase;
    result.audit_trace.push(AuditStep {
        step_number: result.audit_trace.len() as u32 + 1,
        rule_id: "fixed_phase_fallback".to_string(),
        rule_name: "Fixed Plan Unavailable".to_string(),
        input: serde_json::json!({ "eligibility": request.eligibility }),
        output: serde_json::json!({ "pay_scheme": PayScheme::FourTwoTwelve }),
        reasoning: format!(
            "Eligibility is {}: shared parental leave is unavailable, showing the {} schedule",
            request.eligibility.id(),
            PayScheme::FourTwoTwelve
        ),
    });
    result
}

fn holiday_weeks(request: &LeaveRequest, kind: HolidayKind) -> u32 {
    request
        .holidays
        .iter()
        .find(|h| h.kind == kind)
        .map(|h| h.interval.weeks_spanned())
        .unwrap_or(0)
}

fn phase_gross(rate: PhaseRate, weekly_base: Decimal, config: &TaxYearConfig) -> Decimal {
    match rate {
        PhaseRate::Base => weekly_base,
        PhaseRate::NinetyPercent => weekly_base * Decimal::new(9, 1),
        PhaseRate::HalfPlusStatutory => {
            weekly_base * Decimal::new(5, 1) + config.statutory_weekly_rate
        }
        PhaseRate::Statutory => config.statutory_weekly_rate,
    }
}

fn week_status(request: &LeaveRequest, pay_type: PayType, monday: chrono::NaiveDate) -> String {
    match pay_type {
        PayType::HolidayFullPay => request
            .holidays
            .iter()
            .find(|h| h.interval.contains(monday))
            .map(|h| h.kind.display_name())
            .unwrap_or("Back at Work"),
        PayType::SharedParental => SHARED_PARENTAL_STATUS,
        _ => LEAVE_STATUS,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_schedule;
    use crate::models::{
        CalculationOptions, DateInterval, Eligibility, HolidayPeriod, PayBasis,
    };
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn period(kind: HolidayKind, start: &str, end: &str) -> HolidayPeriod {
        HolidayPeriod {
            kind,
            interval: DateInterval::new(date(start), date(end)).unwrap(),
        }
    }

    fn request() -> LeaveRequest {
        LeaveRequest {
            annual_salary: dec("41236"),
            leave_start_date: date("2025-10-06"),
            leave_end_date: None,
            pay_scheme: PayScheme::Statutory,
            holidays: vec![
                period(HolidayKind::Easter, "2026-03-30", "2026-04-17"),
                period(HolidayKind::MidYear, "2026-05-25", "2026-05-31"),
                period(HolidayKind::Summer, "2026-07-20", "2026-08-30"),
            ],
            eligibility: Eligibility::BothEligible,
            options: CalculationOptions {
                mode: CalculationMode::FixedPhase,
                ..Default::default()
            },
        }
    }

    fn config() -> TaxYearConfig {
        TaxYearConfig::uk_2025_26()
    }

    #[test]
    fn test_phase_sizes() {
        let result = calculate_fixed_plan(&request(), &config());
        let sizes: Vec<u32> = result.phases.iter().map(|p| p.week_count).collect();
        assert_eq!(sizes, vec![4, 2, 12, 7, 3, 5, 1, 7, 6, 5]);
        assert_eq!(sizes.iter().sum::<u32>(), 52);
        assert_eq!(result.weeks.len(), 52);
        assert_eq!(result.mode, CalculationMode::FixedPhase);
    }

    #[test]
    fn test_phase_labels_and_rates() {
        let result = calculate_fixed_plan(&request(), &config());
        let phases = &result.phases;
        assert_eq!(phases[2].label, "OMP ½ + SMP");
        assert_eq!(phases[2].weekly_net, dec("580.53"));
        assert_eq!(phases[1].weekly_net, dec("713.7"));
        assert_eq!(phases[4].label, "Easter (full pay)");
        assert_eq!(phases[4].weekly_net, dec("793"));
        assert_eq!(phases[9].label, "SPL 3 – ShPP");
        assert_eq!(phases[9].weekly_net, dec("184.03"));
    }

    #[test]
    fn test_totals() {
        let result = calculate_fixed_plan(&request(), &config());
        assert_eq!(result.optimised_total, dec("23912.48"));
        assert_eq!(result.normal_total, dec("15430.39"));
        assert_eq!(result.gain, dec("8482.09"));
    }

    #[test]
    fn test_week_records_follow_phases() {
        let result = calculate_fixed_plan(&request(), &config());
        // Week 26 is the first Easter week of the plan
        let week = &result.weeks[25];
        assert_eq!(week.pay_type, PayType::HolidayFullPay);
        assert_eq!(week.optimised_pay, dec("793"));
        assert_eq!(week.standard_pay, dec("184.03"));
        assert_eq!(week.status, "Easter Break");

        let shpp = &result.weeks[29];
        assert_eq!(shpp.pay_type, PayType::SharedParental);
        assert_eq!(shpp.status, "Shared Parental Leave");
    }

    #[test]
    fn test_missing_holidays_give_empty_phases() {
        let mut req = request();
        req.holidays.clear();
        let result = calculate_fixed_plan(&req, &config());
        assert_eq!(result.phases[4].week_count, 0);
        assert_eq!(result.phases[6].week_count, 0);
        assert_eq!(result.phases[8].week_count, 0);
        assert_eq!(result.phases[9].week_count, 52 - 37);
        let covered: u32 = result.phases.iter().map(|p| p.week_count).sum();
        assert_eq!(covered, 52);
    }

    #[test]
    fn test_short_horizon_truncates_plan() {
        let mut req = request();
        req.leave_end_date = Some(date("2026-01-04"));
        let result = calculate_fixed_plan(&req, &config());
        let sizes: Vec<u32> = result.phases.iter().map(|p| p.week_count).collect();
        assert_eq!(sizes, vec![4, 2, 7, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(result.weeks.len(), 13);
    }

    #[test]
    fn test_long_holidays_never_exceed_horizon() {
        let mut req = request();
        req.holidays = vec![period(HolidayKind::Easter, "2026-03-30", "2026-12-31")];
        let result = calculate_fixed_plan(&req, &config());
        let covered: u32 = result.phases.iter().map(|p| p.week_count).sum();
        assert_eq!(covered, 52);
        assert_eq!(result.phases[4].week_count, 27);
        assert_eq!(result.phases[9].week_count, 0);
    }

    #[test]
    fn test_not_eligible_falls_back_to_four_two_twelve() {
        let mut req = request();
        req.eligibility = Eligibility::NotEligible;
        let result = calculate_fixed_plan(&req, &config());
        assert_eq!(result.mode, CalculationMode::FixedPhase);
        assert_eq!(result.gain, Decimal::ZERO);
        assert_eq!(result.normal_total, dec("15430.39"));
        assert_eq!(result.audit_trace.last().unwrap().rule_id, "fixed_phase_fallback");

        let mut scheme_req = req.clone();
        scheme_req.pay_scheme = PayScheme::FourTwoTwelve;
        scheme_req.options.mode = CalculationMode::SchemeDriven;
        let scheme_driven = calculate_schedule(&scheme_req, &config());
        assert_eq!(result.weeks, scheme_driven.weeks);
        assert_eq!(result.phases, scheme_driven.phases);
    }

    #[test]
    fn test_net_basis() {
        let mut req = request();
        req.options.pay_basis = PayBasis::Net;
        let result = calculate_fixed_plan(&req, &config());
        assert_eq!(result.phases[0].weekly_net, dec("569.68"));
        assert_eq!(result.phases[3].weekly_net, dec("170.41"));
    }

    #[test]
    fn test_dispatch_from_calculate_schedule() {
        let result = calculate_schedule(&request(), &config());
        assert_eq!(result.phases.len(), 10);
        assert_eq!(result.audit_trace[2].rule_id, "fixed_phase_plan");
    }
}
