//! Response types for the maternity pay planner API.
//!
//! This module defines the success body for `/calculate`, the scheme listing
//! for `/schemes`, and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, FieldProblem};
use crate::models::{CalculationResult, PayScheme, ResultSummary};

/// Response body for a successful calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Identifier of this calculation, also logged as the correlation id.
    pub calculation_id: Uuid,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Id of the tax year the figures were taken from.
    pub tax_year: String,
    /// Totals rounded to pence.
    pub summary: ResultSummary,
    /// The full schedule.
    pub result: CalculationResult,
}

/// One entry in the `/schemes` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeInfo {
    /// The id to send as `pay_scheme`.
    pub id: String,
    /// What the scheme pays.
    pub description: String,
}

impl From<PayScheme> for SchemeInfo {
    fn from(scheme: PayScheme) -> Self {
        Self {
            id: scheme.id().to_string(),
            description: scheme.description().to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field problems for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<FieldProblem>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            problems: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response listing every problem.
    pub fn validation(problems: Vec<FieldProblem>) -> Self {
        let message = match problems.len() {
            1 => "1 field is invalid".to_string(),
            n => format!("{} fields are invalid", n),
        };
        Self {
            problems,
            ..Self::new("VALIDATION_ERROR", message)
        }
    }

    /// Creates a tax year not found error response.
    pub fn tax_year_not_found(id: &str) -> Self {
        Self::with_details(
            "TAX_YEAR_NOT_FOUND",
            format!("Tax year not found: {}", id),
            format!("No configuration is loaded for the tax year '{}'", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { problems } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation(problems),
            },
            EngineError::TaxYearNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::tax_year_not_found(&id),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
        }
    }
}
