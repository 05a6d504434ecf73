//! Styling constants and piece glyphs

use board_core::{Piece, PieceSide, PieceType};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay
pub const HOVER_SQUARE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.35);
pub const CAPTURE_SQUARE: Color = Color::from_rgba(0.8, 0.1, 0.1, 0.35);
pub const CANDIDATE_DOT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);
pub const COORD_TEXT: Color = Color::from_rgb(0.75, 0.75, 0.75);

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const COORD_SIZE: f32 = 20.0;
pub const PANEL_WIDTH: f32 = 320.0;

/// Unicode glyph for a piece.
pub fn piece_char(piece: Piece) -> &'static str {
    match (piece.side, piece.kind) {
        (PieceSide::White, PieceType::King) => "♔",
        (PieceSide::White, PieceType::Queen) => "♕",
        (PieceSide::White, PieceType::Rook) => "♖",
        (PieceSide::White, PieceType::Bishop) => "♗",
        (PieceSide::White, PieceType::Knight) => "♘",
        (PieceSide::White, PieceType::Pawn) => "♙",
        (PieceSide::Black, PieceType::King) => "♚",
        (PieceSide::Black, PieceType::Queen) => "♛",
        (PieceSide::Black, PieceType::Rook) => "♜",
        (PieceSide::Black, PieceType::Bishop) => "♝",
        (PieceSide::Black, PieceType::Knight) => "♞",
        (PieceSide::Black, PieceType::Pawn) => "♟",
    }
}

/// Blend two colors together
pub fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
