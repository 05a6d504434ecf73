//! Highlight overlay driven by controller events

use crate::board::Relocation;
use crate::events::BoardObserver;
use crate::movegen::CandidateSet;
use crate::types::Square;

/// What the overlay shows on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// The square the held piece was picked up from
    Active,
    /// A previewed destination
    Candidate,
}

/// Display state for the selection preview.
///
/// One candidate marker per candidate square, one active marker on the
/// origin, plus the square currently hovered by a drag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOverlay {
    active: Option<Square>,
    candidates: CandidateSet,
    hover: Option<Square>,
}

impl HighlightOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was shown with `origin` and its candidates.
    pub fn show(&mut self, origin: Square, candidates: &CandidateSet) {
        self.active = Some(origin);
        self.candidates = candidates.clone();
    }

    /// Remove every marker. Clearing an already clear overlay does nothing.
    pub fn clear(&mut self) {
        self.active = None;
        self.candidates.clear();
        self.hover = None;
    }

    pub fn is_clear(&self) -> bool {
        self.active.is_none() && self.candidates.is_empty() && self.hover.is_none()
    }

    pub fn set_hover(&mut self, sq: Option<Square>) {
        self.hover = sq;
    }

    pub fn hover(&self) -> Option<Square> {
        self.hover
    }

    pub fn active(&self) -> Option<Square> {
        self.active
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn marker_at(&self, sq: Square) -> Option<Marker> {
        if self.active == Some(sq) {
            Some(Marker::Active)
        } else if self.candidates.contains(&sq) {
            Some(Marker::Candidate)
        } else {
            None
        }
    }

    /// Number of markers currently shown, hover excluded.
    pub fn marker_count(&self) -> usize {
        self.candidates.len() + usize::from(self.active.is_some())
    }
}

impl BoardObserver for HighlightOverlay {
    fn on_candidates_changed(&mut self, origin: Square, candidates: &CandidateSet) {
        self.show(origin, candidates);
    }

    fn on_candidates_cleared(&mut self) {
        self.clear();
    }

    fn on_board_changed(&mut self, _relocation: &Relocation) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_show_places_one_marker_per_candidate() {
        let mut overlay = HighlightOverlay::new();
        let cands: CandidateSet = [at(5, 0), at(4, 0)].into_iter().collect();
        overlay.show(at(6, 0), &cands);

        assert_eq!(overlay.marker_count(), 3);
        assert_eq!(overlay.marker_at(at(6, 0)), Some(Marker::Active));
        assert_eq!(overlay.marker_at(at(5, 0)), Some(Marker::Candidate));
        assert_eq!(overlay.marker_at(at(4, 0)), Some(Marker::Candidate));
        assert_eq!(overlay.marker_at(at(3, 0)), None);
    }

    #[test]
    fn test_show_replaces_previous_markers() {
        let mut overlay = HighlightOverlay::new();
        overlay.show(at(6, 0), &[at(5, 0)].into_iter().collect());
        overlay.show(at(7, 1), &[at(5, 2)].into_iter().collect());

        assert_eq!(overlay.marker_at(at(5, 0)), None);
        assert_eq!(overlay.marker_at(at(6, 0)), None);
        assert_eq!(overlay.marker_at(at(5, 2)), Some(Marker::Candidate));
        assert_eq!(overlay.marker_count(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut overlay = HighlightOverlay::new();
        overlay.show(at(6, 0), &[at(5, 0)].into_iter().collect());
        overlay.set_hover(Some(at(5, 0)));

        overlay.clear();
        let once = overlay.clone();
        overlay.clear();
        assert_eq!(overlay, once);
        assert!(overlay.is_clear());
        assert_eq!(overlay, HighlightOverlay::new());
    }

    #[test]
    fn test_empty_candidate_set_still_marks_origin() {
        let mut overlay = HighlightOverlay::new();
        overlay.on_candidates_changed(at(7, 4), &CandidateSet::new());
        assert_eq!(overlay.marker_count(), 1);
        assert_eq!(overlay.active(), Some(at(7, 4)));
    }
}
