//! HTTP API module for the maternity pay planner.
//!
//! This module provides the REST API endpoints for calculating pay schedules
//! and listing the supported pay schemes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, SchemeInfo};
pub use state::AppState;
