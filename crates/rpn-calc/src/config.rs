use crate::error::CalcError;
use crate::format::{NumberFormatter, DEFAULT_MAX_FRACTION_DIGITS};
use crate::history::DEFAULT_CAPACITY;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Calculator settings, usually read from a TOML file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prefix of failure descriptions, e.g. `Error: division by zero`.
    pub error_label: String,
    /// The variable driven when plotting.
    pub plot_variable: String,
    pub format: FormatConfig,
    pub history: HistoryConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    pub max_fraction_digits: usize,
    /// A single character, or empty to disable grouping.
    pub grouping_separator: String,
    pub nan_symbol: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            error_label: "Error".to_string(),
            plot_variable: "M".to_string(),
            format: FormatConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            grouping_separator: " ".to_string(),
            nan_symbol: "Error".to_string(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, CalcError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CalcError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        if self.plot_variable.is_empty() {
            return Err(CalcError::InvalidConfig(
                "plot_variable must not be empty".to_string(),
            ));
        }
        if self.history.capacity == 0 {
            return Err(CalcError::InvalidConfig(
                "history.capacity must be at least 1".to_string(),
            ));
        }
        if self.format.grouping_separator.chars().count() > 1 {
            return Err(CalcError::InvalidConfig(format!(
                "format.grouping_separator must be a single character, got {:?}",
                self.format.grouping_separator
            )));
        }
        if self.format.grouping_separator == "." {
            return Err(CalcError::InvalidConfig(
                "format.grouping_separator must differ from the decimal separator".to_string(),
            ));
        }
        Ok(())
    }

    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter {
            grouping_separator: self.format.grouping_separator.chars().next(),
            max_fraction_digits: self.format.max_fraction_digits,
            nan_symbol: self.format.nan_symbol.clone(),
            ..NumberFormatter::default()
        }
    }
}
