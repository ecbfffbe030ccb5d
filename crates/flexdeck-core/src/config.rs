// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tuning knobs for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Lower bound for a split node's ratio.
    pub ratio_min: f32,
    /// Upper bound for a split node's ratio.
    pub ratio_max: f32,
    /// Gap between sibling panes, in host units.
    pub pane_padding: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            ratio_min: 0.1,
            ratio_max: 0.9,
            pane_padding: 8.0,
        }
    }
}

/// Sidebar sizing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarSettings {
    /// Dragging the panel narrower than this hides it instead.
    pub min_width: f32,
    /// Widths beyond this are ignored during a drag.
    pub max_width: f32,
    /// Width the panel opens at.
    pub default_width: f32,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            min_width: 250.0,
            max_width: 600.0,
            default_width: 300.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout engine settings
    pub layout: LayoutSettings,

    /// Sidebar settings
    pub sidebar: SidebarSettings,

    /// Workspace dimensions handed to the render walk
    pub workspace_width: f32,
    pub workspace_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            sidebar: SidebarSettings::default(),
            workspace_width: 1200.0,
            workspace_height: 800.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/flexdeck/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flexdeck").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_ratio_bounds_ordered() {
        let settings = LayoutSettings::default();
        assert!(settings.ratio_min < settings.ratio_max);
        assert!(settings.ratio_min >= 0.0 && settings.ratio_max <= 1.0);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.layout, LayoutSettings::default());
        assert_eq!(config.sidebar, SidebarSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut config = Config::default();
        config.layout.pane_padding = 3.5;
        config.workspace_width = 999.0;

        let path = std::env::temp_dir().join(format!(
            "flexdeck-config-test-{}.toml",
            std::process::id()
        ));
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.layout, config.layout);
        assert_eq!(loaded.sidebar, config.sidebar);
        assert!((loaded.workspace_width - 999.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let config: Config = toml::from_str("[layout]\npane_padding = 4.0\n").unwrap();
        assert!((config.layout.pane_padding - 4.0).abs() < f32::EPSILON);
        assert!((config.layout.ratio_min - 0.1).abs() < f32::EPSILON);
    }
}
