//! Outbound notifications from the controller to whatever draws the board.

use crate::board::Relocation;
use crate::movegen::CandidateSet;
use crate::types::Square;

/// Receives the controller's outbound events.
///
/// The controller never touches presentation; a renderer implements this
/// trait (or records events with [`EventLog`]) and decides how to draw them.
pub trait BoardObserver {
    /// A piece on `origin` was picked up and `candidates` should be previewed.
    fn on_candidates_changed(&mut self, origin: Square, candidates: &CandidateSet);

    /// Any previewed candidates should be removed.
    fn on_candidates_cleared(&mut self);

    /// A relocation was committed to the board.
    fn on_board_changed(&mut self, relocation: &Relocation);
}

/// Observer that ignores everything.
impl BoardObserver for () {
    fn on_candidates_changed(&mut self, _origin: Square, _candidates: &CandidateSet) {}
    fn on_candidates_cleared(&mut self) {}
    fn on_board_changed(&mut self, _relocation: &Relocation) {}
}

/// Owned form of an outbound event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    CandidatesChanged {
        origin: Square,
        candidates: CandidateSet,
    },
    CandidatesCleared,
    BoardChanged(Relocation),
}

/// Records events in the order they were emitted.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<BoardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl BoardObserver for EventLog {
    fn on_candidates_changed(&mut self, origin: Square, candidates: &CandidateSet) {
        self.events.push(BoardEvent::CandidatesChanged {
            origin,
            candidates: candidates.clone(),
        });
    }

    fn on_candidates_cleared(&mut self) {
        self.events.push(BoardEvent::CandidatesCleared);
    }

    fn on_board_changed(&mut self, relocation: &Relocation) {
        self.events.push(BoardEvent::BoardChanged(*relocation));
    }
}
