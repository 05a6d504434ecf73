//! Interaction settings, loadable from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::BoardState;
use crate::error::ConfigError;

/// How the controller treats targets and which board it starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Only commit onto squares in the last computed candidate set.
    /// Off by default: candidates are a visual hint and any other square
    /// commits.
    pub enforce_legal_targets: bool,
    /// Piece-placement layout to start from instead of the standard position.
    pub start_layout: Option<String>,
}

impl InteractionConfig {
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

    /// Board the controller starts (and resets) to.
    pub fn start_board(&self) -> Result<BoardState, ConfigError> {
        match &self.start_layout {
            Some(layout) => Ok(BoardState::from_layout(layout)?),
            None => Ok(BoardState::startpos()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
