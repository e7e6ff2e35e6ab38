//! Phase segmentation.
//!
//! Groups consecutive weeks with the same pay type into [`PayPhase`]s.

use crate::models::{PayPhase, WeekRecord};

/// Splits a run of weeks into phases wherever the pay type changes.
///
/// Each phase takes its weekly amount from the standard pay of its first week.
/// The phases cover every week exactly once, in order.
///
/// # Example
///
/// ```
/// use maternity_pay::calculation::segment_phases;
/// use maternity_pay::models::{PayType, WeekRecord};
/// use chrono::{Duration, NaiveDate};
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
/// let weeks: Vec<WeekRecord> = (1..=5)
///     .map(|n| WeekRecord {
///         week_number: n,
///         week_start_date: start + Duration::weeks(i64::from(n) - 1),
///         standard_pay: if n <= 4 { Decimal::from(793) } else { Decimal::new(71370, 2) },
///         optimised_pay: Decimal::ZERO,
///         pay_type: if n <= 4 { PayType::FullPay } else { PayType::NinetyPercent },
///         status: "Maternity Leave".to_string(),
///     })
///     .collect();
///
/// let phases = segment_phases(&weeks);
/// assert_eq!(phases.len(), 2);
/// assert_eq!(phases[0].week_count, 4);
/// assert_eq!(phases[0].total_net, Decimal::from(3172));
/// assert_eq!(phases[1].first_week, 5);
/// ```
pub fn segment_phases(weeks: &[WeekRecord]) -> Vec<PayPhase> {
    let mut phases = Vec::new();
    let mut current: Option<&WeekRecord> = None;
    let mut count: u32 = 0;

    for week in weeks {
        match current {
            Some(first) if first.pay_type == week.pay_type => count += 1,
            _ => {
                if let Some(first) = current {
                    phases.push(close_phase(first, count));
                }
                current = Some(week);
                count = 1;
            }
        }
    }

    if let Some(first) = current {
        phases.push(close_phase(first, count));
    }

    phases
}

fn close_phase(first: &WeekRecord, count: u32) -> PayPhase {
    PayPhase::new(
        first.pay_type.label(),
        first.pay_type,
        first.week_number,
        count,
        first.standard_pay,
    )
}
