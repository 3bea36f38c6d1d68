//! Configuration validation for gift-ranking.

use super::types::{AppConfig, DisplayConfig, TuiConfig};

/// Theme names accepted by `tui.theme`.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

/// Map a theme name or alias (case-insensitive) to its entry in
/// [`VALID_THEMES`].
pub fn canonical_theme(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "dark" => Some("dark"),
        "light" => Some("light"),
        "high-contrast" | "highcontrast" | "hc" => Some("high-contrast"),
        _ => None,
    }
}

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.display.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if canonical_theme(&self.theme).is_none() {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }
        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!("Tick rate must be between 16 and 5000 ms, got {}", self.tick_rate_ms),
            });
        }
        errors
    }
}

impl Validatable for DisplayConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.initial_count == 0 {
            errors.push(ConfigError {
                field: "display.initial_count".to_string(),
                message: "At least one card must be shown while collapsed".to_string(),
            });
        }
        if !(1..=6).contains(&self.columns) {
            errors.push(ConfigError {
                field: "display.columns".to_string(),
                message: format!("Columns must be between 1 and 6, got {}", self.columns),
            });
        }
        errors
    }
}
