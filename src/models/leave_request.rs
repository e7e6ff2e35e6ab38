//! Leave request models.
//!
//! This module contains the typed [`LeaveRequest`] the calculation runs on,
//! the raw form-shaped [`LeaveRequestInput`] it is validated from, and the
//! enums describing pay schemes, eligibility and holiday periods.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// The number of weeks covered when no leave end date is given.
pub const DEFAULT_HORIZON_WEEKS: i64 = 52;

/// A contractual enhanced-pay policy.
///
/// # Example
///
/// ```
/// use maternity_pay::models::PayScheme;
///
/// assert_eq!(PayScheme::from_id("18_8"), Some(PayScheme::EighteenEight));
/// assert_eq!(PayScheme::EighteenEight.id(), "18_8");
/// assert_eq!(PayScheme::from_id("unknown"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayScheme {
    /// 4 weeks at 100%, 2 weeks at 90%, 12 weeks at 50% plus statutory pay.
    #[serde(rename = "4_2_12")]
    FourTwoTwelve,
    /// 13 weeks at 100%.
    #[serde(rename = "13_weeks_100")]
    ThirteenWeeksFull,
    /// 6 weeks at 100%, 12 weeks at 50% plus statutory pay.
    #[serde(rename = "6_12")]
    SixTwelve,
    /// Statutory pay only.
    #[serde(rename = "statutory")]
    Statutory,
    /// 26 weeks at 100%.
    #[serde(rename = "26_weeks_full")]
    TwentySixWeeksFull,
    /// 18 weeks at 100%, 8 weeks at 50%.
    #[serde(rename = "18_8")]
    EighteenEight,
}

impl PayScheme {
    /// Every scheme, in the order they are offered.
    pub const ALL: [PayScheme; 6] = [
        PayScheme::FourTwoTwelve,
        PayScheme::ThirteenWeeksFull,
        PayScheme::SixTwelve,
        PayScheme::Statutory,
        PayScheme::TwentySixWeeksFull,
        PayScheme::EighteenEight,
    ];

    /// The wire id of the scheme.
    pub fn id(&self) -> &'static str {
        match self {
            PayScheme::FourTwoTwelve => "4_2_12",
            PayScheme::ThirteenWeeksFull => "13_weeks_100",
            PayScheme::SixTwelve => "6_12",
            PayScheme::Statutory => "statutory",
            PayScheme::TwentySixWeeksFull => "26_weeks_full",
            PayScheme::EighteenEight => "18_8",
        }
    }

    /// Looks up a scheme by its wire id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// A human-readable description of the scheme.
    pub fn description(&self) -> &'static str {
        match self {
            PayScheme::FourTwoTwelve => {
                "4 weeks at 100%, 2 weeks at 90% plus 12 weeks at 50% + SMP"
            }
            PayScheme::ThirteenWeeksFull => "13 weeks 100%",
            PayScheme::SixTwelve => "6 weeks 100%, 12 weeks at 50% + SMP",
            PayScheme::Statutory => "Statutory only (90% for 6 weeks then SMP)",
            PayScheme::TwentySixWeeksFull => "26 weeks full pay",
            PayScheme::EighteenEight => "18 weeks full pay, 8 weeks 50% pay",
        }
    }
}

impl std::fmt::Display for PayScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether the employee can move leave into shared parental leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// Both parents are eligible.
    BothEligible,
    /// The partner cannot take leave but meets the requirements for the employee to.
    PartnerNotEligible,
    /// Shared parental leave is not available.
    NotEligible,
}

impl Eligibility {
    /// The wire id of the status.
    pub fn id(&self) -> &'static str {
        match self {
            Eligibility::BothEligible => "both_eligible",
            Eligibility::PartnerNotEligible => "partner_not_eligible",
            Eligibility::NotEligible => "not_eligible",
        }
    }

    /// Looks up an eligibility status by its wire id.
    pub fn from_id(id: &str) -> Option<Self> {
        [
            Eligibility::BothEligible,
            Eligibility::PartnerNotEligible,
            Eligibility::NotEligible,
        ]
        .into_iter()
        .find(|e| e.id() == id)
    }

    /// Returns `true` if returning to work during holidays is possible.
    pub fn allows_optimisation(&self) -> bool {
        !matches!(self, Eligibility::NotEligible)
    }
}

/// The institutional holiday a period represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// The Easter break.
    Easter,
    /// The mid-year (May) half-term.
    MidYear,
    /// The summer break.
    Summer,
}

impl HolidayKind {
    /// Looks up a holiday kind by its wire id.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "easter" => Some(HolidayKind::Easter),
            "mid_year" => Some(HolidayKind::MidYear),
            "summer" => Some(HolidayKind::Summer),
            _ => None,
        }
    }

    /// The name shown as a week's status.
    pub fn display_name(&self) -> &'static str {
        match self {
            HolidayKind::Easter => "Easter Break",
            HolidayKind::MidYear => "May Half-Term",
            HolidayKind::Summer => "Summer Break",
        }
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An inclusive date range with `start <= end`.
///
/// # Example
///
/// ```
/// use maternity_pay::models::DateInterval;
/// use chrono::NaiveDate;
///
/// let easter = DateInterval::new(
///     NaiveDate::from_ymd_opt(2026, 3, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 4, 17).unwrap(),
/// )
/// .unwrap();
///
/// assert!(easter.contains(NaiveDate::from_ymd_opt(2026, 4, 17).unwrap()));
/// assert!(!easter.contains(NaiveDate::from_ymd_opt(2026, 4, 18).unwrap()));
/// assert_eq!(easter.weeks_spanned(), 3);
///
/// // Reversed ranges are rejected
/// assert!(DateInterval::new(easter.end(), easter.start()).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Creates an interval, or `None` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// The first day of the interval.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the interval.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a date falls within the interval, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if two intervals share at least one day.
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The number of leave weeks the interval occupies in a fixed-phase plan.
    ///
    /// Any part of a week counts as a whole week, and a span of exactly `n`
    /// weeks touches `n + 1` weeks.
    pub fn weeks_spanned(&self) -> u32 {
        let days = (self.end - self.start).num_days();
        u32::try_from(days / 7 + 1).unwrap_or(u32::MAX)
    }
}

/// A holiday period during which the employee could return to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayPeriod {
    /// Which holiday this is.
    pub kind: HolidayKind,
    /// The dates it covers.
    pub interval: DateInterval,
}

/// How the schedule is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Evaluate the selected pay scheme week by week.
    #[default]
    SchemeDriven,
    /// Follow the fixed maternity-plus-shared-parental plan.
    FixedPhase,
}

/// Whether amounts are reported before or after deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// Gross pay.
    #[default]
    Gross,
    /// Pay after pension, income tax and National Insurance.
    Net,
}

/// The divisor turning annual salary into a weekly base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeeklyDivisor {
    /// 52 weeks per year.
    #[default]
    #[serde(rename = "52")]
    FiftyTwo,
    /// 365 / 7 rounded to four places.
    #[serde(rename = "52.1429")]
    CalendarAverage,
}

impl WeeklyDivisor {
    /// The divisor as a decimal.
    pub fn value(&self) -> Decimal {
        match self {
            WeeklyDivisor::FiftyTwo => Decimal::from(52),
            WeeklyDivisor::CalendarAverage => Decimal::new(521429, 4),
        }
    }
}

/// What to do when two holiday periods share days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayOverlapPolicy {
    /// The earliest period in the request's list wins.
    #[default]
    FirstMatch,
    /// Overlapping periods fail validation.
    Reject,
}

/// Switches selecting between the calculation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationOptions {
    /// Scheme-driven or fixed-phase.
    pub mode: CalculationMode,
    /// Gross or net amounts.
    pub pay_basis: PayBasis,
    /// Weekly base divisor.
    pub weekly_divisor: WeeklyDivisor,
    /// Holiday overlap handling.
    pub holiday_overlap: HolidayOverlapPolicy,
}

/// A validated request for a pay schedule.
///
/// Built by [`crate::calculation::validate_request`]; every field is known to
/// be well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRequest {
    /// Annual salary, strictly positive.
    pub annual_salary: Decimal,
    /// The first day of leave.
    pub leave_start_date: NaiveDate,
    /// The last day of leave, if different from the default horizon.
    pub leave_end_date: Option<NaiveDate>,
    /// The contractual pay scheme.
    pub pay_scheme: PayScheme,
    /// Holiday periods, in priority order.
    pub holidays: Vec<HolidayPeriod>,
    /// Shared parental leave eligibility.
    pub eligibility: Eligibility,
    /// Calculation variant switches.
    pub options: CalculationOptions,
}

impl LeaveRequest {
    /// The last day of the leave horizon.
    ///
    /// Defaults to the day before the 52-week anniversary of the start date.
    pub fn horizon_end(&self) -> NaiveDate {
        self.leave_end_date
            .unwrap_or_else(|| default_leave_end(self.leave_start_date))
    }
}

/// The default last day of leave for a given start date.
///
/// The horizon is inclusive, so it ends the day before the 52-week anniversary.
pub fn default_leave_end(start: NaiveDate) -> NaiveDate {
    start + Duration::weeks(DEFAULT_HORIZON_WEEKS) - Duration::days(1)
}

/// A holiday period as entered on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInput {
    /// `easter`, `mid_year` or `summer`.
    pub kind: String,
    /// First day, `YYYY-MM-DD`.
    #[serde(default)]
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    #[serde(default)]
    pub end: Option<String>,
}

/// A leave request as entered on the form, before validation.
///
/// Every field is optional and textual so that missing and malformed values
/// can be reported together instead of failing on the first one.
///
/// # Example
///
/// ```
/// use maternity_pay::models::LeaveRequestInput;
///
/// let input: LeaveRequestInput = serde_json::from_str(r#"{
///     "annual_salary": 41236,
///     "leave_start_date": "2025-10-06",
///     "pay_scheme": "statutory",
///     "eligibility": "both_eligible"
/// }"#).unwrap();
///
/// assert_eq!(input.annual_salary.as_deref(), Some("41236"));
/// assert!(input.holidays.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestInput {
    /// Annual salary; accepted as a JSON number or string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub annual_salary: Option<String>,
    /// First day of leave, `YYYY-MM-DD`.
    #[serde(default)]
    pub leave_start_date: Option<String>,
    /// Planned return date, `YYYY-MM-DD`.
    #[serde(default)]
    pub leave_end_date: Option<String>,
    /// Pay scheme id (e.g. `4_2_12`).
    #[serde(default)]
    pub pay_scheme: Option<String>,
    /// Eligibility id (e.g. `both_eligible`).
    #[serde(default)]
    pub eligibility: Option<String>,
    /// Holiday periods, in priority order.
    #[serde(default)]
    pub holidays: Vec<HolidayInput>,
    /// Calculation variant switches.
    #[serde(default)]
    pub options: CalculationOptions,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_pay_scheme_ids_round_trip() {
        for scheme in PayScheme::ALL {
            assert_eq!(PayScheme::from_id(scheme.id()), Some(scheme));
            let json = serde_json::to_string(&scheme).unwrap();
            assert_eq!(json, format!("\"{}\"", scheme.id()));
        }
    }

    #[test]
    fn test_eligibility_serialization() {
        let json = serde_json::to_string(&Eligibility::PartnerNotEligible).unwrap();
        assert_eq!(json, "\"partner_not_eligible\"");
        assert!(Eligibility::PartnerNotEligible.allows_optimisation());
        assert!(!Eligibility::NotEligible.allows_optimisation());
    }

    #[test]
    fn test_interval_overlap() {
        let a = DateInterval::new(date("2026-03-30"), date("2026-04-17")).unwrap();
        let b = DateInterval::new(date("2026-04-17"), date("2026-04-20")).unwrap();
        let c = DateInterval::new(date("2026-05-25"), date("2026-05-31")).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_weeks_spanned() {
        let single_day = DateInterval::new(date("2026-05-25"), date("2026-05-25")).unwrap();
        assert_eq!(single_day.weeks_spanned(), 1);

        let half_term = DateInterval::new(date("2026-05-25"), date("2026-05-31")).unwrap();
        assert_eq!(half_term.weeks_spanned(), 1);

        let exactly_one_week = DateInterval::new(date("2026-05-25"), date("2026-06-01")).unwrap();
        assert_eq!(exactly_one_week.weeks_spanned(), 2);

        let summer = DateInterval::new(date("2026-07-20"), date("2026-08-30")).unwrap();
        assert_eq!(summer.weeks_spanned(), 6);
    }

    #[test]
    fn test_weekly_divisor_values() {
        assert_eq!(WeeklyDivisor::FiftyTwo.value(), Decimal::from(52));
        assert_eq!(WeeklyDivisor::CalendarAverage.value().to_string(), "52.1429");
        let json = serde_json::to_string(&WeeklyDivisor::CalendarAverage).unwrap();
        assert_eq!(json, "\"52.1429\"");
    }

    #[test]
    fn test_options_default_when_absent() {
        let input: LeaveRequestInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.options, CalculationOptions::default());
        assert_eq!(input.options.mode, CalculationMode::SchemeDriven);
        assert_eq!(input.options.pay_basis, PayBasis::Gross);
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let input: LeaveRequestInput =
            serde_json::from_str(r#"{"options": {"pay_basis": "net"}}"#).unwrap();
        assert_eq!(input.options.pay_basis, PayBasis::Net);
        assert_eq!(input.options.holiday_overlap, HolidayOverlapPolicy::FirstMatch);
    }

    #[test]
    fn test_salary_accepts_string_or_number() {
        let input: LeaveRequestInput =
            serde_json::from_str(r#"{"annual_salary": "43607.50"}"#).unwrap();
        assert_eq!(input.annual_salary.as_deref(), Some("43607.50"));

        let input: LeaveRequestInput = serde_json::from_str(r#"{"annual_salary": null}"#).unwrap();
        assert_eq!(input.annual_salary, None);
    }

    #[test]
    fn test_default_horizon_is_52_weeks() {
        assert_eq!(default_leave_end(date("2025-10-06")), date("2026-10-04"));
    }
}
