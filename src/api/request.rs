//! Request types for the maternity pay planner API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::LeaveRequestInput;

/// Request body for the `/calculate` endpoint.
///
/// The leave fields sit at the top level next to the optional tax year.
/// Everything is validated together by the handler so that all problems are
/// reported in one response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Tax year id (e.g. `2025-26`); the server default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_year: Option<String>,
    /// The leave request as entered.
    #[serde(flatten)]
    pub leave: LeaveRequestInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculationMode, PayBasis};

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "tax_year": "2025-26",
            "annual_salary": 43607,
            "leave_start_date": "2025-10-06",
            "pay_scheme": "4_2_12",
            "eligibility": "both_eligible",
            "holidays": [
                { "kind": "easter", "start": "2026-03-30", "end": "2026-04-17" }
            ],
            "options": { "mode": "fixed_phase", "pay_basis": "net" }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tax_year.as_deref(), Some("2025-26"));
        assert_eq!(request.leave.annual_salary.as_deref(), Some("43607"));
        assert_eq!(request.leave.holidays.len(), 1);
        assert_eq!(request.leave.options.mode, CalculationMode::FixedPhase);
        assert_eq!(request.leave.options.pay_basis, PayBasis::Net);
    }

    #[test]
    fn test_deserialize_empty_request() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.tax_year.is_none());
        assert!(request.leave.annual_salary.is_none());
        assert!(request.leave.holidays.is_empty());
    }
}
