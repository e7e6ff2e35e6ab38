//! Tax-year configuration for the maternity pay planner.
//!
//! This module provides the statutory figures used by the calculation,
//! either built in or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use maternity_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tax_years").unwrap();
//! println!("Latest tax year: {}", config.latest().unwrap().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::TaxYearConfig;
