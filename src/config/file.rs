//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".gift-ranking.yaml",
    ".gift-ranking.yml",
    "gift-ranking.yaml",
    "gift-ranking.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. The directories from [`search_dirs`]
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_dirs().iter().find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in order:
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/gift-ranking/)
/// 4. Home directory
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    search_dirs_from(std::env::current_dir().ok())
}

fn search_dirs_from(cwd: Option<PathBuf>) -> Vec<PathBuf> {
    let git_root = cwd.as_deref().and_then(find_git_root);
    let mut searched: Vec<PathBuf> = cwd.into_iter().collect();
    if let Some(root) = git_root {
        if !searched.contains(&root) {
            searched.push(root);
        }
    }
    searched.extend(dirs::config_dir().map(|dir| dir.join("gift-ranking")));
    searched.extend(dirs::home_dir());
    searched
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        r"# Gift ranking configuration
# Place this file at .gift-ranking.yaml in your project root or ~/.config/gift-ranking/

{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r#"# Gift Ranking Configuration File
# ================================
#
# Place it at:
#   - .gift-ranking.yaml in your project root
#   - ~/.config/gift-ranking/gift-ranking.yaml for global config
#
# CLI arguments always override file settings.

# TUI configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
  # Event poll interval (16-5000 ms)
  tick_rate_ms: 250

# Ranking section layout
display:
  title: "실시간 급상승 선물랭킹"
  # Cards shown before expanding
  initial_count: 6
  # Cards per row (1-6)
  columns: 3
  # Price suffix, rendered as "<price> <suffix>"
  currency_suffix: "원"
"#
    .to_string()
}
