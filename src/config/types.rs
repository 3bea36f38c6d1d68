//! Configuration types for gift-ranking.

use crate::ranking::{DisplayOptions, DEFAULT_CURRENCY_SUFFIX, INITIAL_PRODUCT_COUNT, SECTION_TITLE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of product columns in the grid.
pub const DEFAULT_COLUMNS: usize = 3;

/// Default event poll interval for the TUI.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Top-level configuration, loaded from a config file and overlaid with CLI
/// flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// How the ranking section lays out and formats products
    pub display: DisplayConfig,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Ranking section presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    /// Section heading
    pub title: String,
    /// Cards shown before "더보기" is pressed
    #[schemars(range(min = 1))]
    pub initial_count: usize,
    /// Cards per grid row
    #[schemars(range(min = 1, max = 6))]
    pub columns: usize,
    /// Appended to every price after a space
    pub currency_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: SECTION_TITLE.to_string(),
            initial_count: INITIAL_PRODUCT_COUNT,
            columns: DEFAULT_COLUMNS,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

impl DisplayConfig {
    /// The subset the render tree needs.
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            title: self.title.clone(),
            initial_count: self.initial_count,
            currency_suffix: self.currency_suffix.clone(),
        }
    }
}

// ============================================================================
// Persisted TUI preferences
// ============================================================================

/// Preferences remembered between TUI sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gift-ranking").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}
