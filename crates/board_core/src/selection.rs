//! Pick-up / put-down state machine shared by the drag and click surfaces

use tracing::{debug, info};

use crate::board::{BoardState, Relocation};
use crate::config::InteractionConfig;
use crate::error::ConfigError;
use crate::events::BoardObserver;
use crate::movegen::{CandidateSet, candidates};
use crate::types::Square;

/// What, if anything, is currently picked up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Holding {
        origin: Square,
        /// Last candidate set computed for `origin` against the current board
        candidates: CandidateSet,
    },
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }

    pub fn origin(&self) -> Option<Square> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Holding { origin, .. } => Some(*origin),
        }
    }

    pub fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Holding { candidates, .. } => Some(candidates),
        }
    }
}

/// Result of feeding one interaction into the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// A piece was picked up and `candidates` squares were published
    Picked { origin: Square, candidates: usize },
    /// The held piece was put back
    Cancelled { origin: Square },
    /// The held piece was relocated
    Committed(Relocation),
    /// Target outside the candidate set while enforcement is on
    Rejected { origin: Square, target: Square },
}

/// Owns one board and the selection on it.
///
/// Every interaction runs to completion synchronously and reports its
/// visual consequences through the observer passed in.
#[derive(Clone, Debug)]
pub struct BoardController {
    board: BoardState,
    start: BoardState,
    selection: SelectionState,
    config: InteractionConfig,
    last_relocation: Option<Relocation>,
    /// Square the current drag picked a piece up from
    drag_origin: Option<Square>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::with_board(BoardState::startpos(), InteractionConfig::default())
    }
}

impl BoardController {
    pub fn new(config: InteractionConfig) -> Result<Self, ConfigError> {
        let board = config.start_board()?;
        Ok(Self::with_board(board, config))
    }

    /// Start from an explicit board; `reset` returns to it.
    pub fn with_board(board: BoardState, config: InteractionConfig) -> Self {
        Self {
            start: board.clone(),
            board,
            selection: SelectionState::Idle,
            config,
            last_relocation: None,
            drag_origin: None,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn last_relocation(&self) -> Option<Relocation> {
        self.last_relocation
    }

    /// Origin of the piece the current drag carries, if any.
    pub fn drag_origin(&self) -> Option<Square> {
        self.drag_origin
    }

    pub fn set_enforce_legal_targets(&mut self, enforce: bool) {
        self.config.enforce_legal_targets = enforce;
    }

    /// Put the starting board back and drop any selection.
    pub fn reset(&mut self, observer: &mut impl BoardObserver) {
        self.board = self.start.clone();
        self.selection = SelectionState::Idle;
        self.last_relocation = None;
        self.drag_origin = None;
        observer.on_candidates_cleared();
        debug!("board reset");
    }

    /// Pick up the piece on `sq` and publish its candidates.
    ///
    /// Picking an empty square changes nothing. Picking another piece while
    /// holding one replaces the selection.
    pub fn pick(&mut self, sq: Square, observer: &mut impl BoardObserver) -> Transition {
        let Some(piece) = self.board.piece_at(sq) else {
            debug!(square = %sq, "pick on empty square ignored");
            return Transition::Ignored;
        };

        if !self.selection.is_idle() {
            observer.on_candidates_cleared();
        }

        let cands = candidates(&self.board, sq);
        let count = cands.len();
        observer.on_candidates_changed(sq, &cands);
        self.selection = SelectionState::Holding {
            origin: sq,
            candidates: cands,
        };
        debug!(square = %sq, piece = %piece, candidates = count, "picked");
        Transition::Picked {
            origin: sq,
            candidates: count,
        }
    }

    /// Put the held piece down on `sq`.
    ///
    /// Targeting the origin cancels. Any other square commits and discards
    /// whatever stood there, unless `enforce_legal_targets` is set and `sq`
    /// was not a candidate.
    pub fn target(&mut self, sq: Square, observer: &mut impl BoardObserver) -> Transition {
        let (origin, legal) = match &self.selection {
            SelectionState::Idle => return Transition::Ignored,
            SelectionState::Holding { origin, candidates } => (*origin, candidates.contains(&sq)),
        };

        if sq == origin {
            return self.cancel(observer);
        }

        if self.config.enforce_legal_targets && !legal {
            debug!(origin = %origin, target = %sq, "target outside candidates rejected");
            return Transition::Rejected { origin, target: sq };
        }

        self.selection = SelectionState::Idle;
        let Some(reloc) = self.board.relocate(origin, sq) else {
            // origin emptied underneath the selection
            observer.on_candidates_cleared();
            return Transition::Cancelled { origin };
        };

        self.last_relocation = Some(reloc);
        observer.on_board_changed(&reloc);
        observer.on_candidates_cleared();
        info!(
            origin = %reloc.origin,
            dest = %reloc.dest,
            moved = %reloc.moved,
            displaced = ?reloc.displaced.map(|p| p.to_char()),
            "relocation committed"
        );
        Transition::Committed(reloc)
    }

    /// Drop the selection without touching the board. No-op when idle.
    pub fn cancel(&mut self, observer: &mut impl BoardObserver) -> Transition {
        match std::mem::take(&mut self.selection) {
            SelectionState::Idle => Transition::Ignored,
            SelectionState::Holding { origin, .. } => {
                observer.on_candidates_cleared();
                debug!(origin = %origin, "selection cancelled");
                Transition::Cancelled { origin }
            }
        }
    }

    /// Click surface: pick when idle, otherwise put down (a click on the
    /// origin cancels).
    pub fn click(&mut self, sq: Square, observer: &mut impl BoardObserver) -> Transition {
        if self.selection.is_idle() {
            self.pick(sq, observer)
        } else {
            self.target(sq, observer)
        }
    }

    /// Drag surface: begin dragging the piece on `sq`.
    ///
    /// A drag from an empty square carries nothing; its drop only cancels.
    pub fn drag_start(&mut self, sq: Square, observer: &mut impl BoardObserver) -> Transition {
        let outcome = self.pick(sq, observer);
        self.drag_origin = match outcome {
            Transition::Picked { origin, .. } => Some(origin),
            _ => None,
        };
        outcome
    }

    /// Drag surface: release over `over`, or outside any square when `None`.
    ///
    /// Releasing on the origin or outside the board cancels, as does a drop
    /// whose drag picked nothing up. A drop that enforcement rejects also
    /// cancels, since the drag is over either way. The overlay is always
    /// cleared at the end of a drag.
    pub fn drag_drop(
        &mut self,
        over: Option<Square>,
        observer: &mut impl BoardObserver,
    ) -> Transition {
        let carried = self.drag_origin.take().is_some();
        let outcome = match over {
            Some(_) if !carried => self.cancel(observer),
            Some(sq) => match self.target(sq, observer) {
                Transition::Rejected { origin, target } => {
                    self.cancel(observer);
                    Transition::Rejected { origin, target }
                }
                other => other,
            },
            None => self.cancel(observer),
        };
        observer.on_candidates_cleared();
        outcome
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
