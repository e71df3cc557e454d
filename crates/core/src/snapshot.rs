use std::hash::{Hash, Hasher};

use crate::board::Tile;
use crate::types::{TileId, TurnPhase};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimersSnapshot {
    /// Remaining mismatch hold, 0 when none is pending.
    pub mismatch_ms: u32,
    /// Remaining time before the win announcement, 0 when none is pending.
    pub win_ms: u32,
}

/// Read-only copy of a session for rendering.
///
/// Reused across frames via `GameSession::snapshot_into` so the render loop
/// keeps its buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tiles: Vec<Tile>,
    pub selected: Vec<TileId>,
    pub phase: TurnPhase,
    pub input_locked: bool,
    pub pairs_found: usize,
    pub target: usize,
    pub won: bool,
    pub win_announced: bool,
    pub round: u32,
    pub seed: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.selected.clear();
        self.phase = TurnPhase::Idle;
        self.input_locked = false;
        self.pairs_found = 0;
        self.target = 0;
        self.won = false;
        self.win_announced = false;
        self.round = 0;
        self.seed = 0;
        self.timers = TimersSnapshot::default();
    }

    /// Whether the player can still flip tiles.
    pub fn playable(&self) -> bool {
        !self.won && !self.input_locked
    }

    /// Stable hash of everything visible on screen.
    ///
    /// Timers are left out: a countdown alone does not change a frame.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Fnv1aHasher::new();
        self.tiles.hash(&mut hasher);
        self.selected.hash(&mut hasher);
        self.phase.hash(&mut hasher);
        self.pairs_found.hash(&mut hasher);
        self.target.hash(&mut hasher);
        self.win_announced.hash(&mut hasher);
        self.round.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            selected: Vec::new(),
            phase: TurnPhase::Idle,
            input_locked: false,
            pairs_found: 0,
            target: 0,
            won: false,
            win_announced: false,
            round: 0,
            seed: 0,
            timers: TimersSnapshot::default(),
        }
    }
}

/// 64-bit FNV-1a.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions, and
/// fingerprints are compared between frames of one process as well as in
/// tests.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_for_equal_snapshots() {
        let mut a = GameSnapshot::default();
        a.tiles.push(Tile::new("x"));
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_changes_when_a_tile_flips() {
        let mut a = GameSnapshot::default();
        a.tiles.push(Tile::new("x"));
        let before = a.fingerprint();
        a.tiles[0].flipped = true;
        assert_ne!(before, a.fingerprint());
    }

    #[test]
    fn fingerprint_ignores_timers() {
        let mut a = GameSnapshot::default();
        let before = a.fingerprint();
        a.timers.mismatch_ms = 500;
        assert_eq!(before, a.fingerprint());
    }

    #[test]
    fn clear_resets_to_default() {
        let mut a = GameSnapshot::default();
        a.tiles.push(Tile::new("x"));
        a.won = true;
        a.round = 3;
        a.clear();
        assert_eq!(a, GameSnapshot::default());
    }
}
