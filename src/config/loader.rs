//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::TaxYearConfig;

/// Loads and provides access to tax-year configuration.
///
/// # Directory Structure
///
/// ```text
/// config/tax_years/
/// ├── 2025-26.yaml
/// └── 2026-27.yaml
/// ```
///
/// Each file holds one [`TaxYearConfig`]. Ids must be unique.
///
/// # Example
///
/// ```no_run
/// use maternity_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tax_years")?;
/// let tax_year = loader.get_tax_year("2025-26")?;
/// println!("Statutory rate: £{}", tax_year.statutory_weekly_rate);
/// # Ok::<(), maternity_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Sorted by id, oldest first.
    tax_years: Vec<TaxYearConfig>,
}

impl ConfigLoader {
    /// Loads every `*.yaml` file in the given directory.
    ///
    /// Returns an error if the directory is missing or empty, if any file
    /// fails to parse, if any file fails [`TaxYearConfig::validate`], or if
    /// two files share an id.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tax_years = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
                let tax_year = Self::load_yaml(&path)?;
                debug!(tax_year = %tax_year.id, path = %path.display(), "Loaded tax year");
                tax_years.push(tax_year);
            }
        }

        if tax_years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax year files found)", dir_str),
            });
        }

        Self::from_tax_years(tax_years)
    }

    /// Builds a loader from already-constructed tax years.
    pub fn from_tax_years(mut tax_years: Vec<TaxYearConfig>) -> EngineResult<Self> {
        for tax_year in &tax_years {
            tax_year.validate()?;
        }

        tax_years.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(pair) = tax_years.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(EngineError::InvalidConfig {
                field: "id".to_string(),
                message: format!("tax year '{}' is defined more than once", pair[0].id),
            });
        }

        Ok(Self { tax_years })
    }

    /// A loader holding only the built-in 2025-26 figures.
    pub fn builtin() -> Self {
        Self {
            tax_years: vec![TaxYearConfig::uk_2025_26()],
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml(path: &Path) -> EngineResult<TaxYearConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets a tax year by its id.
    pub fn get_tax_year(&self, id: &str) -> EngineResult<&TaxYearConfig> {
        self.tax_years
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| EngineError::TaxYearNotFound { id: id.to_string() })
    }

    /// The most recent tax year by id.
    pub fn latest(&self) -> Option<&TaxYearConfig> {
        self.tax_years.last()
    }

    /// All loaded tax years, oldest first.
    pub fn tax_years(&self) -> &[TaxYearConfig] {
        &self.tax_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "maternity-pay-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/tax_years").unwrap();
        let tax_year = loader.get_tax_year("2025-26").unwrap();
        assert_eq!(tax_year, &TaxYearConfig::uk_2025_26());
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_empty_directory_returns_config_not_found() {
        let dir = scratch_dir("empty");
        match ConfigLoader::load(&dir).unwrap_err() {
            EngineError::ConfigNotFound { path } => assert!(path.contains("no tax year files")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_bad_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("broken.yaml"), "id: [unterminated").unwrap();
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_latest_picks_highest_id() {
        let next = TaxYearConfig {
            id: "2026-27".to_string(),
            name: "UK tax year 2026-27".to_string(),
            statutory_weekly_rate: Decimal::new(18718, 2),
            ..TaxYearConfig::uk_2025_26()
        };
        let loader =
            ConfigLoader::from_tax_years(vec![next, TaxYearConfig::uk_2025_26()]).unwrap();
        assert_eq!(loader.latest().unwrap().id, "2026-27");
        assert_eq!(loader.tax_years()[0].id, "2025-26");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = ConfigLoader::from_tax_years(vec![
            TaxYearConfig::uk_2025_26(),
            TaxYearConfig::uk_2025_26(),
        ]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unknown_tax_year() {
        let loader = ConfigLoader::builtin();
        match loader.get_tax_year("1999-00").unwrap_err() {
            EngineError::TaxYearNotFound { id } => assert_eq!(id, "1999-00"),
            other => panic!("Expected TaxYearNotFound, got {:?}", other),
        }
    }
}
