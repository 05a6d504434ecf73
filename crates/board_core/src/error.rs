//! Error types for board construction and configuration.
//!
//! Interactions themselves never fail; see [`crate::selection::Transition`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare { row: u8, col: u8 },
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),
    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bad start layout: {0}")]
    Layout(#[from] BoardError),
}
