//! Viewer settings file (`board.toml`)

use board_core::{ConfigError, InteractionConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an alternative settings file.
pub const CONFIG_ENV: &str = "BOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "board.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Draw row 7 at the top instead of row 0
    pub flipped: bool,
    /// Rank and file labels along the board edges
    pub show_coordinates: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            flipped: false,
            show_coordinates: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub interaction: InteractionConfig,
    pub view: ViewSettings,
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Settings from `$BOARD_CONFIG` or `./board.toml`; defaults when the
    /// file is missing or unreadable.
    pub fn discover() -> Self {
        let (path, explicit) = match std::env::var_os(CONFIG_ENV) {
            Some(p) => (PathBuf::from(p), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_optional() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert!(s.view.show_coordinates);
    }

    #[test]
    fn test_parse_both_sections() {
        let s = Settings::from_toml_str(
            r#"
            [interaction]
            enforce_legal_targets = true

            [view]
            flipped = true
            "#,
        )
        .unwrap();
        assert!(s.interaction.enforce_legal_targets);
        assert!(s.view.flipped);
        assert!(s.view.show_coordinates);
    }
}
