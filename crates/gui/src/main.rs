//! Interactive chess board
//!
//! Drag a piece, or click it and then click a destination. The squares a
//! pawn or knight may move to are highlighted while it is held.
//!
//! Settings are read from `board.toml` (or `$BOARD_CONFIG`); log verbosity
//! follows `RUST_LOG`.

mod app;
mod board;
mod pointer;
mod settings;
mod styles;

use app::BoardApp;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    application("Chess Board", BoardApp::update, BoardApp::view)
        .theme(BoardApp::theme)
        .window_size((1000.0, 720.0))
        .run_with(BoardApp::new)
}
