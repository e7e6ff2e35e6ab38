//! Input validation.
//!
//! Turns a [`LeaveRequestInput`] into a [`LeaveRequest`], collecting every
//! problem before reporting so nothing reaches the arithmetic malformed.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult, FieldProblem};
use crate::models::{
    DateInterval, Eligibility, HolidayInput, HolidayKind, HolidayOverlapPolicy, HolidayPeriod,
    LeaveRequest, LeaveRequestInput, PayScheme,
};

use super::holidays::overlapping_pairs;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The largest annual salary accepted, in pounds.
pub const MAX_ANNUAL_SALARY: i64 = 10_000_000;

/// The longest leave horizon accepted, in weeks.
pub const MAX_LEAVE_WEEKS: i64 = 156;

/// Validates a raw leave request.
///
/// Returns [`EngineError::Validation`] listing every problem found:
/// missing required fields, non-numeric salary or one outside
/// `(0, MAX_ANNUAL_SALARY]`, malformed dates, reversed date ranges, a horizon
/// of [`MAX_LEAVE_WEEKS`] or more, unknown ids, incomplete or duplicate
/// holidays, and overlapping holidays when the overlap policy is `reject`.
///
/// A holiday with neither date given is treated as not configured.
///
/// # Examples
///
/// ```
/// use maternity_pay::calculation::validate_request;
/// use maternity_pay::models::{LeaveRequestInput, PayScheme};
///
/// let input = LeaveRequestInput {
///     annual_salary: Some("41236".to_string()),
///     leave_start_date: Some("2025-10-06".to_string()),
///     pay_scheme: Some("statutory".to_string()),
///     eligibility: Some("both_eligible".to_string()),
///     ..Default::default()
/// };
/// let request = validate_request(&input).unwrap();
/// assert_eq!(request.pay_scheme, PayScheme::Statutory);
///
/// let problems = validate_request(&LeaveRequestInput::default()).unwrap_err();
/// assert_eq!(problems.problems().len(), 4);
/// ```
pub fn validate_request(input: &LeaveRequestInput) -> EngineResult<LeaveRequest> {
    let mut problems = Vec::new();

    let annual_salary = parse_salary(input.annual_salary.as_deref(), &mut problems);
    let leave_start_date = required(
        "leave_start_date",
        input.leave_start_date.as_deref(),
        &mut problems,
    )
    .and_then(|raw| parse_date("leave_start_date", raw, &mut problems));
    let leave_end_date = present(input.leave_end_date.as_deref())
        .and_then(|raw| parse_date("leave_end_date", raw, &mut problems));

    if let (Some(start), Some(end)) = (leave_start_date, leave_end_date) {
        if end < start {
            problems.push(FieldProblem::new(
                "leave_end_date",
                format!("{} is before leave_start_date {}", end, start),
            ));
        } else if (end - start).num_days() >= MAX_LEAVE_WEEKS * 7 {
            problems.push(FieldProblem::new(
                "leave_end_date",
                format!(
                    "{} is more than {} weeks after leave_start_date {}",
                    end, MAX_LEAVE_WEEKS, start
                ),
            ));
        }
    }

    let pay_scheme = required("pay_scheme", input.pay_scheme.as_deref(), &mut problems)
        .and_then(|raw| {
            let scheme = PayScheme::from_id(raw);
            if scheme.is_none() {
                let known: Vec<&str> = PayScheme::ALL.iter().map(|s| s.id()).collect();
                problems.push(FieldProblem::new(
                    "pay_scheme",
                    format!("unknown pay scheme '{}'; expected one of {}", raw, known.join(", ")),
                ));
            }
            scheme
        });

    let eligibility = required("eligibility", input.eligibility.as_deref(), &mut problems)
        .and_then(|raw| {
            let eligibility = Eligibility::from_id(raw);
            if eligibility.is_none() {
                problems.push(FieldProblem::new(
                    "eligibility",
                    format!(
                        "unknown eligibility '{}'; expected one of both_eligible, partner_not_eligible, not_eligible",
                        raw
                    ),
                ));
            }
            eligibility
        });

    let holidays = parse_holidays(&input.holidays, &mut problems);

    if input.options.holiday_overlap == HolidayOverlapPolicy::Reject {
        for (a, b) in overlapping_pairs(&holidays) {
            problems.push(FieldProblem::new(
                "holidays",
                format!("{} overlaps {}", a.display_name(), b.display_name()),
            ));
        }
    }

    match (annual_salary, leave_start_date, pay_scheme, eligibility) {
        (Some(annual_salary), Some(leave_start_date), Some(pay_scheme), Some(eligibility))
            if problems.is_empty() =>
        {
            Ok(LeaveRequest {
                annual_salary,
                leave_start_date,
                leave_end_date,
                pay_scheme,
                holidays,
                eligibility,
                options: input.options,
            })
        }
        _ => Err(EngineError::Validation { problems }),
    }
}

/// Treats blank strings the same as absent ones.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn required<'a>(
    field: &str,
    raw: Option<&'a str>,
    problems: &mut Vec<FieldProblem>,
) -> Option<&'a str> {
    let value = present(raw);
    if value.is_none() {
        problems.push(FieldProblem::missing(field));
    }
    value
}

fn parse_salary(raw: Option<&str>, problems: &mut Vec<FieldProblem>) -> Option<Decimal> {
    let raw = required("annual_salary", raw, problems)?;
    match Decimal::from_str(raw) {
        Ok(salary) if salary > Decimal::from(MAX_ANNUAL_SALARY) => {
            problems.push(FieldProblem::new(
                "annual_salary",
                format!("must not exceed {}, got {}", MAX_ANNUAL_SALARY, salary),
            ));
            None
        }
        Ok(salary) if salary > Decimal::ZERO => Some(salary),
        Ok(salary) => {
            problems.push(FieldProblem::new(
                "annual_salary",
                format!("must be greater than zero, got {}", salary),
            ));
            None
        }
        Err(_) => {
            problems.push(FieldProblem::new(
                "annual_salary",
                format!("'{}' is not a valid amount", raw),
            ));
            None
        }
    }
}

fn parse_date(field: &str, raw: &str, problems: &mut Vec<FieldProblem>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            problems.push(FieldProblem::new(
                field,
                format!("'{}' is not a valid YYYY-MM-DD date", raw),
            ));
            None
        }
    }
}

fn parse_holidays(inputs: &[HolidayInput], problems: &mut Vec<FieldProblem>) -> Vec<HolidayPeriod> {
    let mut holidays = Vec::new();
    let mut seen = HashSet::new();

    for (index, input) in inputs.iter().enumerate() {
        let prefix = format!("holidays[{}]", index);

        let kind = HolidayKind::from_id(input.kind.trim());
        match kind {
            None => problems.push(FieldProblem::new(
                format!("{}.kind", prefix),
                format!(
                    "unknown holiday '{}'; expected one of easter, mid_year, summer",
                    input.kind
                ),
            )),
            Some(kind) if !seen.insert(kind) => problems.push(FieldProblem::new(
                format!("{}.kind", prefix),
                format!("'{}' is listed more than once", input.kind.trim()),
            )),
            Some(_) => {}
        }

        let start_field = format!("{}.start", prefix);
        let end_field = format!("{}.end", prefix);
        let (start, end) = match (present(input.start.as_deref()), present(input.end.as_deref())) {
            (None, None) => continue,
            (Some(start), Some(end)) => (
                parse_date(&start_field, start, problems),
                parse_date(&end_field, end, problems),
            ),
            (None, Some(_)) => {
                problems.push(FieldProblem::new(
                    start_field,
                    "is required when an end date is given",
                ));
                continue;
            }
            (Some(_), None) => {
                problems.push(FieldProblem::new(
                    end_field,
                    "is required when a start date is given",
                ));
                continue;
            }
        };

        if let (Some(kind), Some(start), Some(end)) = (kind, start, end) {
            match DateInterval::new(start, end) {
                Some(interval) => holidays.push(HolidayPeriod { kind, interval }),
                None => problems.push(FieldProblem::new(
                    end_field,
                    format!("{} is before start {}", end, start),
                )),
            }
        }
    }

    holidays
}
