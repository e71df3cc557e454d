//! Scoring module - pairs found and the win condition

/// Progress through one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scoreboard {
    pairs_found: usize,
    target: usize,
}

impl Scoreboard {
    pub fn new(target: usize) -> Self {
        Self {
            pairs_found: 0,
            target,
        }
    }

    /// Count one found pair. Only the match branch of a turn calls this.
    pub fn record_match(&mut self) {
        self.pairs_found += 1;
    }

    /// Exactly every pair found. Overshooting the target is not a win.
    pub fn is_won(&self) -> bool {
        self.pairs_found == self.target
    }

    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.pairs_found)
    }
}
