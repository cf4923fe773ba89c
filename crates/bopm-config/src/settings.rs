//! Top-level configuration document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contract::ContractConfig;
use crate::display::DisplayConfig;
use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::limits::InputLimits;

/// Complete configuration, one TOML table per section.
///
/// ```toml
/// [contract]
/// spot = 15.0
/// option_type = "put"
///
/// [display]
/// precision = 4
///
/// [limits]
/// max_periods = 50
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BopmConfig {
    /// Contract used for any value not given on the command line.
    #[serde(default)]
    pub contract: ContractConfig,

    /// Number formatting and graph styling.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Accepted input ranges.
    #[serde(default)]
    pub limits: InputLimits,
}

impl BopmConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration as TOML to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "configuration written");
        Ok(())
    }
}

impl Validate for BopmConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.display.validate();
        errors.extend(self.limits.validate());
        errors.extend(
            self.limits
                .violations(&self.contract.to_params())
                .into_iter()
                .map(|e| ValidationError::new(format!("contract.{}", e.field), e.message)),
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bopm_core::types::{ExerciseStyle, OptionType};

    #[test]
    fn test_empty_document_is_default() {
        let config = BopmConfig::from_toml_str("").unwrap();
        assert_eq!(config, BopmConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = BopmConfig::from_toml_str(
            r#"
            [contract]
            spot = 40.0
            strike = 50.0
            option_type = "put"
            exercise = "american"

            [display]
            precision = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.contract.spot, 40.0);
        assert_eq!(config.contract.periods, 2);
        assert_eq!(config.contract.option_type, OptionType::Put);
        assert_eq!(config.contract.exercise, ExerciseStyle::American);
        assert_eq!(config.display.precision, 6);
        assert_eq!(config.display.font, "Arial");
        assert_eq!(config.limits.max_periods, 50);
    }

    #[test]
    fn test_contract_outside_limits_rejected() {
        let err = BopmConfig::from_toml_str("[contract]\nperiods = 80\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: contract.periods: 80 is outside [1, 50]"
        );
    }

    #[test]
    fn test_raised_limit_accepts_contract() {
        let config =
            BopmConfig::from_toml_str("[contract]\nperiods = 80\n[limits]\nmax_periods = 200\n")
                .unwrap();
        assert_eq!(config.contract.periods, 80);
    }

    #[test]
    fn test_unknown_option_type_rejected() {
        let err = BopmConfig::from_toml_str("[contract]\noption_type = \"straddle\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_font_breaking_graph_quoting_rejected() {
        let err = BopmConfig::from_toml_str("[display]\nfont = 'Ar\"ial'\n").unwrap_err();
        assert!(err.to_string().starts_with("Validation error: display.font:"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BopmConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[contract]"));
        assert_eq!(BopmConfig::from_toml_str(&text).unwrap(), config);
    }
}
