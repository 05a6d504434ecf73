//! Chess board widget rendering

use crate::styles::{self, COORD_SIZE, SQUARE_SIZE};
use board_core::{BOARD_SIZE, BoardController, HighlightOverlay, Marker, Square};
use iced::widget::{column, container, mouse_area, row, text, Space};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    Pressed(Square),
    Entered(Square),
    Released(Square),
    /// Button released anywhere that is not a square
    ReleasedOutside,
}

/// Renders the chess board
pub struct BoardView<'a> {
    controller: &'a BoardController,
    overlay: &'a HighlightOverlay,
    flipped: bool,
    show_coordinates: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(
        controller: &'a BoardController,
        overlay: &'a HighlightOverlay,
        flipped: bool,
        show_coordinates: bool,
    ) -> Self {
        Self {
            controller,
            overlay,
            flipped,
            show_coordinates,
        }
    }

    /// Row or column index drawn at display position `i`.
    fn board_index(&self, i: u8) -> u8 {
        if self.flipped {
            BOARD_SIZE - 1 - i
        } else {
            i
        }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);
        let mut rank_labels = column![].spacing(0);

        for display_row in 0..BOARD_SIZE {
            let r = self.board_index(display_row);
            let mut rank_row = row![].spacing(0);

            for display_col in 0..BOARD_SIZE {
                let c = self.board_index(display_col);
                if let Ok(sq) = Square::new(r, c) {
                    rank_row = rank_row.push(self.render_square(sq));
                }
            }

            board_column = board_column.push(rank_row);
            if let Ok(sq) = Square::new(r, 0) {
                rank_labels =
                    rank_labels.push(coord_label(sq.rank_char(), COORD_SIZE, SQUARE_SIZE));
            }
        }

        let board = container(board_column).style(|_theme| container::Style {
            border: iced::Border {
                color: Color::from_rgb(0.3, 0.3, 0.3),
                width: 2.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

        if !self.show_coordinates {
            return board.into();
        }

        let mut file_labels = row![Space::with_width(COORD_SIZE)].spacing(0);
        for display_col in 0..BOARD_SIZE {
            if let Ok(sq) = Square::new(0, self.board_index(display_col)) {
                file_labels =
                    file_labels.push(coord_label(sq.file_char(), SQUARE_SIZE, COORD_SIZE));
            }
        }

        column![row![rank_labels, board], file_labels].into()
    }

    /// Render a single square
    fn render_square(&self, sq: Square) -> Element<'a, BoardMessage> {
        let mut bg_color = if sq.is_light() {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        // Highlight last move
        if let Some(reloc) = self.controller.last_relocation() {
            if sq == reloc.origin || sq == reloc.dest {
                bg_color = styles::blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let piece = self.controller.board().piece_at(sq);
        let marker = self.overlay.marker_at(sq);

        match marker {
            Some(Marker::Active) => bg_color = styles::SELECTED_SQUARE,
            // Occupied candidates are captures; tint instead of a dot.
            Some(Marker::Candidate) if piece.is_some() => {
                bg_color = styles::blend_colors(bg_color, styles::CAPTURE_SQUARE);
            }
            _ => {}
        }

        if self.overlay.hover() == Some(sq) {
            bg_color = styles::blend_colors(bg_color, styles::HOVER_SQUARE);
        }

        let content: Element<'a, BoardMessage> = if let Some(pc) = piece {
            text(styles::piece_char(pc))
                .size(SQUARE_SIZE * 0.75)
                .color(Color::BLACK)
                .center()
                .into()
        } else if marker == Some(Marker::Candidate) {
            // Show dot for candidate squares
            text("●")
                .size(SQUARE_SIZE * 0.3)
                .color(styles::CANDIDATE_DOT)
                .center()
                .into()
        } else {
            text("").into()
        };

        let cell = container(content)
            .width(SQUARE_SIZE)
            .height(SQUARE_SIZE)
            .center_x(SQUARE_SIZE)
            .center_y(SQUARE_SIZE)
            .style(move |_theme| container::Style {
                background: Some(iced::Background::Color(bg_color)),
                ..Default::default()
            });

        mouse_area(cell)
            .on_press(BoardMessage::Pressed(sq))
            .on_enter(BoardMessage::Entered(sq))
            .on_release(BoardMessage::Released(sq))
            .into()
    }
}

/// Rank digit or file letter beside the board
fn coord_label<'a>(ch: char, width: f32, height: f32) -> Element<'a, BoardMessage> {
    container(text(ch.to_string()).size(14).color(styles::COORD_TEXT))
        .width(width)
        .height(height)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .into()
}
