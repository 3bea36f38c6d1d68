//! Configuration module for gift-ranking.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Persisted TUI preferences (theme)
//!
//! # Configuration File
//!
//! Place a `.gift-ranking.yaml` file in your project root or
//! `~/.config/gift-ranking/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//! display:
//!   columns: 2
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, DisplayConfig, TuiConfig, TuiPreferences, DEFAULT_COLUMNS, DEFAULT_TICK_RATE_MS,
};
pub use validation::{canonical_theme, ConfigError, Validatable, VALID_THEMES};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.gift-ranking.yaml`.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::RankingError::config(format!("schema serialization: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mentions_sections() {
        let schema = generate_json_schema().expect("schema");
        assert!(schema.contains("\"tui\""));
        assert!(schema.contains("\"display\""));
        assert!(schema.contains("initial_count"));
    }
}
