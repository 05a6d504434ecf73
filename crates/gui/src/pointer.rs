//! Turns raw pointer events on squares into drag and click actions.
//!
//! A press followed by a release on the same square, without the pointer
//! entering another square in between, is a click. Entering another square
//! while the button is down starts a drag from the pressed square.

use board_core::Square;

/// An interaction to feed into the board controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    Click(Square),
    DragStart(Square),
    Hover(Square),
    /// Release over a square, or outside every square when `None`
    Drop(Option<Square>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Gesture {
    #[default]
    Up,
    Pressed(Square),
    Dragging(Square),
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    gesture: Gesture,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging(_))
    }

    pub fn press(&mut self, sq: Square) -> Vec<SurfaceAction> {
        let mut out = Vec::new();
        // The release of the previous drag happened outside the window.
        if self.is_dragging() {
            out.push(SurfaceAction::Drop(None));
        }
        self.gesture = Gesture::Pressed(sq);
        out
    }

    pub fn enter(&mut self, sq: Square) -> Vec<SurfaceAction> {
        match self.gesture {
            Gesture::Pressed(from) if from != sq => {
                self.gesture = Gesture::Dragging(from);
                vec![SurfaceAction::DragStart(from), SurfaceAction::Hover(sq)]
            }
            Gesture::Dragging(_) => vec![SurfaceAction::Hover(sq)],
            _ => Vec::new(),
        }
    }

    pub fn release(&mut self, sq: Square) -> Vec<SurfaceAction> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Up => Vec::new(),
            Gesture::Pressed(from) if from == sq => vec![SurfaceAction::Click(sq)],
            // Moved too fast for an enter event to arrive.
            Gesture::Pressed(from) => {
                vec![SurfaceAction::DragStart(from), SurfaceAction::Drop(Some(sq))]
            }
            Gesture::Dragging(_) => vec![SurfaceAction::Drop(Some(sq))],
        }
    }

    /// Release somewhere that is not a square.
    pub fn release_outside(&mut self) -> Vec<SurfaceAction> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Dragging(_) => vec![SurfaceAction::Drop(None)],
            _ => Vec::new(),
        }
    }
}
