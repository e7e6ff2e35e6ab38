//! Error types for the maternity pay planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation itself can only fail validation; every other variant is
//! raised while loading tax-year configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem with one input field.
///
/// Validation collects every problem it finds before reporting, so callers can
/// show all of them at once.
///
/// # Example
///
/// ```
/// use maternity_pay::error::FieldProblem;
///
/// let problem = FieldProblem::missing("annual_salary");
/// assert_eq!(problem.to_string(), "annual_salary: is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProblem {
    /// The name of the offending field (e.g. `leave_start_date`, `holidays[1].end`).
    pub field: String,
    /// A description of what is wrong with the field.
    pub message: String,
}

impl FieldProblem {
    /// Creates a problem for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a "required field missing" problem.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_problems(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The main error type for the maternity pay planner.
///
/// # Example
///
/// ```
/// use maternity_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/2025-26.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/2025-26.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more inputs were missing or malformed.
    #[error("Validation failed: {}", join_problems(.problems))]
    Validation {
        /// Every problem found, in field order.
        problems: Vec<FieldProblem>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// No tax year with the given id has been loaded.
    #[error("Tax year not found: {id}")]
    TaxYearNotFound {
        /// The tax year id that was requested.
        id: String,
    },
}

impl EngineError {
    /// Returns the field problems when this is a validation error.
    pub fn problems(&self) -> &[FieldProblem] {
        match self {
            EngineError::Validation { problems } => problems,
            _ => &[],
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_every_problem() {
        let error = EngineError::Validation {
            problems: vec![
                FieldProblem::missing("annual_salary"),
                FieldProblem::new("leave_start_date", "'06/10/2025' is not a valid YYYY-MM-DD date"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Validation failed: annual_salary: is required; leave_start_date: '06/10/2025' is not a valid YYYY-MM-DD date"
        );
        assert_eq!(error.problems().len(), 2);
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "pension_rate".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'pension_rate': must be between 0 and 1"
        );
    }

    #[test]
    fn test_tax_year_not_found_displays_id() {
        let error = EngineError::TaxYearNotFound {
            id: "1999-00".to_string(),
        };
        assert_eq!(error.to_string(), "Tax year not found: 1999-00");
        assert!(error.problems().is_empty());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_salary() -> EngineResult<()> {
            Err(EngineError::Validation {
                problems: vec![FieldProblem::missing("annual_salary")],
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_salary()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
