//! Turn module - the flip/compare state machine
//!
//! `Idle -> OneSelected -> Evaluating -> Idle`. The turn state only tracks
//! which tiles are selected and whether input is locked; timing (the
//! mismatch hold) belongs to the session that owns it.

use arrayvec::ArrayVec;
use log::trace;

use crate::board::Board;
use crate::prepare::MatchIndex;
use crate::types::{TileId, TurnPhase};

/// Why a selection was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Two tiles are already face-up awaiting resolution.
    Locked,
    /// No such tile on this board.
    UnknownTile,
    /// Tile is already face-up in the current turn.
    AlreadyFlipped,
    /// Tile belongs to a found pair.
    AlreadyMatched,
}

/// Result of a tile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored(IgnoreReason),
    /// First tile of the turn turned face-up.
    Revealed(TileId),
    /// Second tile completed a pair; both tiles are now matched.
    Matched { first: TileId, second: TileId },
    /// Second tile did not match; both stay face-up and input is locked.
    Mismatched { first: TileId, second: TileId },
}

/// Selected tiles and the input lock.
///
/// Invariant: `input_locked` iff two tiles are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnState {
    selected: ArrayVec<TileId, 2>,
    input_locked: bool,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TurnPhase {
        match self.selected.len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneSelected,
            _ => TurnPhase::Evaluating,
        }
    }

    pub fn selected(&self) -> &[TileId] {
        &self.selected
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    /// Apply a tile selection to `board`.
    ///
    /// A match resolves immediately. A mismatch leaves the turn in
    /// `Evaluating` until [`TurnState::resolve_mismatch`] is called.
    pub fn select(&mut self, board: &mut Board, index: &MatchIndex, tile: TileId) -> SelectOutcome {
        if let Some(reason) = self.rejection(board, tile) {
            trace!("ignoring selection of tile {}: {:?}", tile, reason);
            return SelectOutcome::Ignored(reason);
        }

        let Some(first) = self.selected.first().copied() else {
            flip(board, tile);
            self.selected.push(tile);
            return SelectOutcome::Revealed(tile);
        };

        flip(board, tile);
        self.selected.push(tile);
        self.input_locked = true;

        let is_match = match (board.get(first), board.get(tile)) {
            (Some(a), Some(b)) => index.is_match(&a.word, &b.word),
            _ => false,
        };

        if is_match {
            for id in [first, tile] {
                if let Some(t) = board.get_mut(id) {
                    t.matched = true;
                }
            }
            self.clear();
            SelectOutcome::Matched {
                first,
                second: tile,
            }
        } else {
            SelectOutcome::Mismatched {
                first,
                second: tile,
            }
        }
    }

    /// Turn a mismatched pair face-down and unlock input.
    ///
    /// Returns the tiles that were turned back, or `None` when no mismatch
    /// was pending.
    pub fn resolve_mismatch(&mut self, board: &mut Board) -> Option<[TileId; 2]> {
        if !self.input_locked || self.selected.len() != 2 {
            return None;
        }
        let pair = [self.selected[0], self.selected[1]];
        for id in pair {
            if let Some(t) = board.get_mut(id) {
                t.flipped = false;
            }
        }
        self.clear();
        Some(pair)
    }

    fn rejection(&self, board: &Board, tile: TileId) -> Option<IgnoreReason> {
        if self.input_locked {
            return Some(IgnoreReason::Locked);
        }
        let Some(t) = board.get(tile) else {
            return Some(IgnoreReason::UnknownTile);
        };
        if t.matched {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if t.flipped || self.selected.contains(&tile) {
            return Some(IgnoreReason::AlreadyFlipped);
        }
        None
    }

    fn clear(&mut self) {
        self.selected.clear();
        self.input_locked = false;
    }
}

fn flip(board: &mut Board, tile: TileId) {
    if let Some(t) = board.get_mut(tile) {
        t.flipped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prepare::WordPair;

    fn setup() -> (Board, MatchIndex) {
        let pairs = [WordPair::new("a", "b"), WordPair::new("c", "d")];
        (
            Board::from_words(["a", "c", "b", "d"]),
            MatchIndex::from_pairs(&pairs),
        )
    }

    #[test]
    fn test_first_selection_reveals() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        assert_eq!(turn.select(&mut board, &index, 0), SelectOutcome::Revealed(0));
        assert_eq!(turn.phase(), TurnPhase::OneSelected);
        assert!(!turn.input_locked());
        assert!(board.get(0).unwrap().flipped);
    }

    #[test]
    fn test_match_resolves_immediately() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 0);
        let outcome = turn.select(&mut board, &index, 2);

        assert_eq!(outcome, SelectOutcome::Matched { first: 0, second: 2 });
        assert_eq!(turn.phase(), TurnPhase::Idle);
        assert!(!turn.input_locked());
        for id in [0, 2] {
            let t = board.get(id).unwrap();
            assert!(t.flipped && t.matched);
        }
    }

    #[test]
    fn test_match_is_order_independent() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 2);
        assert!(matches!(
            turn.select(&mut board, &index, 0),
            SelectOutcome::Matched { .. }
        ));
    }

    #[test]
    fn test_mismatch_locks_until_resolved() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 0);
        let outcome = turn.select(&mut board, &index, 1);

        assert_eq!(outcome, SelectOutcome::Mismatched { first: 0, second: 1 });
        assert_eq!(turn.phase(), TurnPhase::Evaluating);
        assert!(turn.input_locked());
        assert_eq!(turn.selected(), &[0, 1]);

        assert_eq!(turn.resolve_mismatch(&mut board), Some([0, 1]));
        assert_eq!(turn.phase(), TurnPhase::Idle);
        assert!(!board.get(0).unwrap().flipped);
        assert!(!board.get(1).unwrap().flipped);
    }

    #[test]
    fn test_locked_turn_ignores_input() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 0);
        turn.select(&mut board, &index, 1);

        let turn_before = turn.clone();
        let board_before = board.clone();
        for tile in 0..6 {
            assert_eq!(
                turn.select(&mut board, &index, tile),
                SelectOutcome::Ignored(IgnoreReason::Locked)
            );
        }
        assert_eq!(turn, turn_before);
        assert_eq!(board, board_before);
    }

    #[test]
    fn test_reselecting_flipped_tile_is_ignored() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 0);
        assert_eq!(
            turn.select(&mut board, &index, 0),
            SelectOutcome::Ignored(IgnoreReason::AlreadyFlipped)
        );
        assert_eq!(turn.selected(), &[0]);
    }

    #[test]
    fn test_matched_tile_is_ignored() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 0);
        turn.select(&mut board, &index, 2);
        assert_eq!(
            turn.select(&mut board, &index, 2),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(turn.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_unknown_tile_is_ignored() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        assert_eq!(
            turn.select(&mut board, &index, 99),
            SelectOutcome::Ignored(IgnoreReason::UnknownTile)
        );
    }

    #[test]
    fn test_word_missing_from_index_is_mismatch() {
        let mut board = Board::from_words(["a", "stray"]);
        let index = MatchIndex::from_pairs(&[WordPair::new("a", "b")]);
        let mut turn = TurnState::new();

        turn.select(&mut board, &index, 1);
        assert!(matches!(
            turn.select(&mut board, &index, 0),
            SelectOutcome::Mismatched { .. }
        ));
    }

    #[test]
    fn test_resolve_without_pending_mismatch_is_noop() {
        let (mut board, index) = setup();
        let mut turn = TurnState::new();

        assert_eq!(turn.resolve_mismatch(&mut board), None);
        turn.select(&mut board, &index, 0);
        assert_eq!(turn.resolve_mismatch(&mut board), None);
        assert!(board.get(0).unwrap().flipped);
    }
}
