//! Presentation settings.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Largest supported number of displayed decimals.
pub const MAX_PRECISION: u32 = 12;

/// How numbers and the lattice graph are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for prices, payoffs and constants.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Graph layout direction (Graphviz `rankdir`).
    #[serde(default = "default_rank_dir")]
    pub rank_dir: String,

    /// Node label font.
    #[serde(default = "default_font")]
    pub font: String,

    /// Node box width in inches.
    #[serde(default = "default_node_width")]
    pub node_width: f64,
}

fn default_precision() -> u32 {
    4
}

fn default_rank_dir() -> String {
    "LR".to_string()
}

fn default_font() -> String {
    "Arial".to_string()
}

fn default_node_width() -> f64 {
    1.6
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            rank_dir: default_rank_dir(),
            font: default_font(),
            node_width: default_node_width(),
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.precision > MAX_PRECISION {
            errors.push(ValidationError::new(
                "display.precision",
                format!("{} exceeds {MAX_PRECISION}", self.precision),
            ));
        }
        if !matches!(self.rank_dir.as_str(), "LR" | "RL" | "TB" | "BT") {
            errors.push(ValidationError::new(
                "display.rank_dir",
                format!("'{}' is not one of LR, RL, TB, BT", self.rank_dir),
            ));
        }
        if self.font.trim().is_empty() {
            errors.push(ValidationError::new("display.font", "must not be empty"));
        } else if self.font.contains(['"', '\\']) {
            // written into a quoted Graphviz attribute
            errors.push(ValidationError::new(
                "display.font",
                format!("'{}' must not contain quotes or backslashes", self.font),
            ));
        }
        if !(self.node_width.is_finite() && self.node_width > 0.0) {
            errors.push(ValidationError::new(
                "display.node_width",
                format!("{} is not a positive width", self.node_width),
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        let display = DisplayConfig::default();
        assert_eq!(display.precision, 4);
        assert!(display.is_valid());
    }

    #[test]
    fn test_invalid_fields() {
        let display = DisplayConfig {
            precision: 20,
            rank_dir: "XY".to_string(),
            font: " ".to_string(),
            node_width: 0.0,
        };
        assert_eq!(display.validate().len(), 4);
    }

    #[test]
    fn test_font_with_quote_or_backslash_rejected() {
        for font in ["Arial\" bold", "C:\\Fonts\\arial"] {
            let display = DisplayConfig {
                font: font.to_string(),
                ..DisplayConfig::default()
            };
            let errors = display.validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "display.font");
        }

        let spaced = DisplayConfig {
            font: "Times New Roman".to_string(),
            ..DisplayConfig::default()
        };
        assert!(spaced.is_valid());
    }
}
