//! Maternity and shared parental pay planner
//!
//! This crate builds a week-by-week pay schedule for a period of maternity
//! leave under a contractual pay scheme, and compares it with a plan that
//! returns to work on full pay during school holiday periods.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
