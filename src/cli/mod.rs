//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod render;
mod view;

pub use render::{render_output, run_render, RenderConfig, RenderFormat};
pub use view::{run_view, ViewConfig};

use crate::config::{canonical_theme, AppConfig, TuiPreferences, Validatable};
use crate::error::{RankingError, Result};

/// Reject a configuration with any invalid field, listing every problem.
pub fn check_config(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(RankingError::config(message))
}

/// Theme to start with: the CLI flag, then the theme saved by the last
/// session, then the config file. A saved theme that is no longer valid is
/// skipped.
pub fn resolve_theme(flag: Option<&str>, config: &AppConfig) -> String {
    pick_theme(flag, TuiPreferences::load(), config)
}

fn pick_theme(flag: Option<&str>, saved: Option<TuiPreferences>, config: &AppConfig) -> String {
    flag.map(str::to_string)
        .or_else(|| {
            let prefs = saved?;
            if canonical_theme(&prefs.theme).is_none() {
                tracing::warn!("Ignoring saved theme '{}'", prefs.theme);
                return None;
            }
            Some(prefs.theme)
        })
        .unwrap_or_else(|| config.tui.theme.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_config_lists_all_errors() {
        let mut config = AppConfig::default();
        assert!(check_config(&config).is_ok());

        config.display.columns = 0;
        config.tui.theme = "neon".to_string();
        let err = check_config(&config).unwrap_err().to_string();
        assert!(err.contains("columns"));
        assert!(err.contains("theme"));
    }

    #[test]
    fn test_theme_precedence() {
        let mut config = AppConfig::default();
        config.tui.theme = "light".to_string();
        let saved = || {
            Some(TuiPreferences {
                theme: "high-contrast".to_string(),
            })
        };

        assert_eq!(pick_theme(Some("dark"), saved(), &config), "dark");
        assert_eq!(pick_theme(None, saved(), &config), "high-contrast");
        assert_eq!(pick_theme(None, None, &config), "light");
    }

    #[test]
    fn test_invalid_saved_theme_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.tui.theme = "light".to_string();
        let saved = Some(TuiPreferences {
            theme: "neon".to_string(),
        });

        config.tui.theme = pick_theme(None, saved, &config);
        assert_eq!(config.tui.theme, "light");
        assert!(check_config(&config).is_ok());
    }

    #[test]
    fn test_theme_alias_flag_passes_validation() {
        let mut config = AppConfig::default();
        config.tui.theme = pick_theme(Some("hc"), None, &config);
        assert!(check_config(&config).is_ok());
    }
}
