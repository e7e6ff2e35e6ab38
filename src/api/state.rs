//! Application state for the maternity pay planner API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxYearConfig};
use crate::error::{EngineError, EngineResult};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded tax-year configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax-year configuration.
    config: Arc<ConfigLoader>,
    /// Tax year used when a request names none; the latest when unset.
    default_tax_year: Option<String>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            default_tax_year: None,
        }
    }

    /// Sets the tax year used when a request names none.
    pub fn with_default_tax_year(mut self, id: impl Into<String>) -> Self {
        self.default_tax_year = Some(id.into());
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Resolves the tax year for a request.
    ///
    /// Falls back to the configured default, then to the latest loaded year.
    pub fn tax_year(&self, requested: Option<&str>) -> EngineResult<&TaxYearConfig> {
        match requested.or(self.default_tax_year.as_deref()) {
            Some(id) => self.config.get_tax_year(id),
            None => self.config.latest().ok_or_else(|| EngineError::TaxYearNotFound {
                id: "latest".to_string(),
            }),
        }
    }
}
