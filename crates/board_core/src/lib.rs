//! Board core for an interactive chess board.
//!
//! - [`BoardState`]: the 8x8 occupancy grid
//! - [`candidates`]: destination preview for pawns and knights
//! - [`BoardController`]: pick / target / cancel, shared by drag and click
//! - [`HighlightOverlay`]: candidate markers, fed through [`BoardObserver`]
//!
//! Full chess legality (check, pins, castling, en-passant, promotion, turn
//! order) is deliberately absent: candidates are a visual hint, and a held
//! piece may be put down anywhere unless
//! [`InteractionConfig::enforce_legal_targets`] is set.

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod highlight;
pub mod movegen;
pub mod selection;
pub mod types;

pub use board::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use highlight::*;
pub use movegen::*;
pub use selection::*;
pub use types::*;
