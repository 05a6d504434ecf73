//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::pointer::{PointerTracker, SurfaceAction};
use crate::settings::Settings;
use crate::styles::{self, PANEL_WIDTH};

use board_core::{BoardController, HighlightOverlay, SelectionState, Transition};
use iced::widget::{
    button, checkbox, column, container, horizontal_rule, mouse_area, row, text, vertical_space,
};
use iced::{Element, Length, Task, Theme};
use tracing::{debug, warn};

/// Main application state
pub struct BoardApp {
    /// Board and selection
    controller: BoardController,
    /// Candidate markers fed by the controller
    overlay: HighlightOverlay,
    /// Press / drag tracking for the board squares
    pointer: PointerTracker,
    /// Board flipped?
    board_flipped: bool,
    show_coordinates: bool,
    /// Outcome of the last interaction, for the status line
    last_transition: Transition,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Controls
    ResetBoard,
    FlipBoard,
    EnforceToggled(bool),
}

impl BoardApp {
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_settings(Settings::discover()), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        let controller = match BoardController::new(settings.interaction.clone()) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "falling back to the standard start position");
                let mut c = BoardController::default();
                c.set_enforce_legal_targets(settings.interaction.enforce_legal_targets);
                c
            }
        };

        Self {
            controller,
            overlay: HighlightOverlay::new(),
            pointer: PointerTracker::new(),
            board_flipped: settings.view.flipped,
            show_coordinates: settings.view.show_coordinates,
            last_transition: Transition::Ignored,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(msg) => {
                let actions = match msg {
                    BoardMessage::Pressed(sq) => self.pointer.press(sq),
                    BoardMessage::Entered(sq) => self.pointer.enter(sq),
                    BoardMessage::Released(sq) => self.pointer.release(sq),
                    BoardMessage::ReleasedOutside => self.pointer.release_outside(),
                };
                for action in actions {
                    self.apply(action);
                }
            }

            Message::ResetBoard => {
                self.controller.reset(&mut self.overlay);
                self.pointer = PointerTracker::new();
                self.last_transition = Transition::Ignored;
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
            }

            Message::EnforceToggled(enforce) => {
                self.controller.set_enforce_legal_targets(enforce);
            }
        }
        Task::none()
    }

    /// Feed one surface action into the controller
    fn apply(&mut self, action: SurfaceAction) {
        debug!(?action, "surface action");
        let transition = match action {
            SurfaceAction::Click(sq) => self.controller.click(sq, &mut self.overlay),
            SurfaceAction::DragStart(sq) => self.controller.drag_start(sq, &mut self.overlay),
            SurfaceAction::Drop(over) => self.controller.drag_drop(over, &mut self.overlay),
            SurfaceAction::Hover(sq) => {
                // Nothing to tint when the drag carries no piece.
                if self.controller.drag_origin().is_some() {
                    self.overlay.set_hover(Some(sq));
                }
                return;
            }
        };
        if transition != Transition::Ignored {
            self.last_transition = transition;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        // Chess board
        let board = BoardView::new(
            &self.controller,
            &self.overlay,
            self.board_flipped,
            self.show_coordinates,
        )
        .view()
        .map(Message::Board);

        // Side panel
        let panel = self.control_panel();

        let content = row![
            board,
            container(panel)
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20);

        // Squares capture their own releases; anything reaching here was
        // released off the board.
        mouse_area(container(content).width(Length::Fill).height(Length::Fill))
            .on_release(Message::Board(BoardMessage::ReleasedOutside))
            .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let reset_btn = button(text("Reset Board"))
            .on_press(Message::ResetBoard)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let enforce = checkbox(
            "Only drop on highlighted squares",
            self.controller.config().enforce_legal_targets,
        )
        .on_toggle(Message::EnforceToggled);

        let selection = match self.controller.selection() {
            SelectionState::Idle => "Nothing selected".to_string(),
            SelectionState::Holding { origin, candidates } => {
                let glyph = self
                    .controller
                    .board()
                    .piece_at(*origin)
                    .map(styles::piece_char)
                    .unwrap_or("?");
                format!("Holding {} on {} ({} targets)", glyph, origin, candidates.len())
            }
        };

        let status = match &self.last_transition {
            Transition::Ignored => String::new(),
            Transition::Picked { origin, .. } => format!("Picked up {}", origin),
            Transition::Cancelled { origin } => format!("Put back on {}", origin),
            Transition::Committed(reloc) => match reloc.displaced {
                Some(taken) => format!(
                    "{} {} → {} takes {}",
                    styles::piece_char(reloc.moved),
                    reloc.origin,
                    reloc.dest,
                    styles::piece_char(taken)
                ),
                None => format!(
                    "{} {} → {}",
                    styles::piece_char(reloc.moved),
                    reloc.origin,
                    reloc.dest
                ),
            },
            Transition::Rejected { target, .. } => format!("{} is not highlighted", target),
        };

        column![
            reset_btn,
            flip_btn,
            vertical_space().height(20),
            enforce,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(selection).size(16),
            text(status).size(14),
        ]
        .spacing(5)
        .into()
    }
}
