//! Core data models for the maternity pay planner.
//!
//! This module contains the request and result types shared by the
//! calculation and the HTTP API.

mod calculation_result;
mod leave_request;
mod money;

pub use calculation_result::{
    AuditStep, CalculationResult, PayPhase, PayType, ResultSummary, WeekRecord,
};
pub use leave_request::{
    CalculationMode, CalculationOptions, DEFAULT_HORIZON_WEEKS, DateInterval, Eligibility,
    HolidayInput, HolidayKind, HolidayOverlapPolicy, HolidayPeriod, LeaveRequest,
    LeaveRequestInput, PayBasis, PayScheme, WeeklyDivisor, default_leave_end,
};
pub use money::round_money;
