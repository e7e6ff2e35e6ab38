//! Calculation logic for the maternity pay planner.
//!
//! This module contains the functions that turn a leave request into a pay
//! schedule: request validation, weekly base derivation, statutory pay, pay
//! scheme evaluation, net pay, week enumeration, holiday lookup, phase
//! segmentation and the fixed-phase plan.

mod fixed_plan;
mod holidays;
mod net_pay;
mod pay_scheme;
mod phase_segmentation;
mod schedule;
mod statutory;
mod validation;
mod week_enumeration;
mod weekly_base;

pub use fixed_plan::calculate_fixed_plan;
pub use holidays::{find_holiday, overlapping_pairs};
pub use net_pay::{NetPayBreakdown, apply_pay_basis, calculate_net_pay};
pub use pay_scheme::{PAID_LEAVE_WEEKS, SchemePay, evaluate_scheme};
pub use phase_segmentation::segment_phases;
pub use schedule::{calculate, calculate_schedule};
pub use statutory::{
    STATUTORY_HIGHER_RATE_WEEKS, statutory_higher_rate_fraction, statutory_weekly_pay,
};
pub use validation::{MAX_ANNUAL_SALARY, MAX_LEAVE_WEEKS, validate_request};
pub use week_enumeration::{enumerate_weeks, first_monday_on_or_after};
pub use weekly_base::{WeeklyBaseResult, derive_weekly_base};
