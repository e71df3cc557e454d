//! Session module - one game on one board
//!
//! A [`GameSession`] owns everything a running game needs: the chosen pairs
//! and their index, the board, turn state, score and the two delays (the
//! mismatch hold and the win announcement). Delays are countdowns advanced by
//! [`GameSession::tick`]; starting a new game replaces the whole session, so
//! a pending delay can never fire against a board that has been discarded.
//!
//! The session performs no I/O. Every visible consequence is queued as an
//! [`Effect`] and collected by the host with [`GameSession::take_effects`].

use log::{debug, info};

use crate::board::Board;
use crate::dataset::WordPairDataset;
use crate::error::Result;
use crate::prepare::{prepare, MatchIndex, PreparedGame, WordPair};
use crate::rng::SimpleRng;
use crate::scoring::Scoreboard;
use crate::snapshot::{GameSnapshot, TimersSnapshot};
use crate::turn::{SelectOutcome, TurnState};
use crate::types::*;

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    prepared: PreparedGame,
    board: Board,
    turn: TurnState,
    score: Scoreboard,
    rng: SimpleRng,
    /// Seed the current board was dealt from.
    seed: u32,
    /// Monotonic round id (increments on new game).
    round: u32,
    /// Remaining mismatch hold; `None` when no mismatch is pending.
    mismatch_timer_ms: Option<u32>,
    /// Remaining time until the win announcement.
    win_timer_ms: Option<u32>,
    win_announced: bool,
    effects: Vec<Effect>,
}

impl GameSession {
    /// Deal a board for already prepared pairs.
    pub fn new(prepared: PreparedGame, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::build(prepared.pairs(), &mut rng);
        let score = Scoreboard::new(prepared.pair_count());

        let effects = vec![
            Effect::RenderTiles(board.words()),
            Effect::RenderStatus {
                pairs_found: 0,
                target: score.target(),
            },
        ];

        Self {
            prepared,
            board,
            turn: TurnState::new(),
            score,
            rng,
            seed,
            round: 0,
            mismatch_timer_ms: None,
            win_timer_ms: None,
            win_announced: false,
            effects,
        }
    }

    /// Prepare pairs from `dataset` and deal them.
    ///
    /// Fails without building a board when the dataset yields no pairs.
    pub fn from_dataset(dataset: &WordPairDataset, target_pairs: usize, seed: u32) -> Result<Self> {
        let mut rng = SimpleRng::new(seed);
        let prepared = prepare(dataset, target_pairs, &mut rng)?;
        info!(
            "starting game with {} pairs ({} dataset)",
            prepared.pair_count(),
            dataset.shape()
        );
        Ok(Self::new(prepared, rng.next_u32()))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    pub fn input_locked(&self) -> bool {
        self.turn.input_locked()
    }

    pub fn pairs(&self) -> &[WordPair] {
        self.prepared.pairs()
    }

    pub fn match_index(&self) -> &MatchIndex {
        self.prepared.index()
    }

    pub fn pairs_found(&self) -> usize {
        self.score.pairs_found()
    }

    pub fn target(&self) -> usize {
        self.score.target()
    }

    pub fn is_won(&self) -> bool {
        self.score.is_won()
    }

    pub fn win_announced(&self) -> bool {
        self.win_announced
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Whether a delayed transition is still outstanding.
    pub fn has_pending_timers(&self) -> bool {
        self.mismatch_timer_ms.is_some() || self.win_timer_ms.is_some()
    }

    /// Drain queued effects, oldest first.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Apply a game action.
    ///
    /// Returns whether the action changed anything. `ChangeTopic` is always
    /// `false` here: leaving the topic means the owner drops the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(tile) => self.select(tile),
            GameAction::NewGame => {
                self.restart();
                true
            }
            GameAction::ChangeTopic => false,
        }
    }

    /// Select a tile. Returns `false` when the selection was ignored.
    pub fn select(&mut self, tile: TileId) -> bool {
        let outcome = self
            .turn
            .select(&mut self.board, self.prepared.index(), tile);

        match outcome {
            SelectOutcome::Ignored(_) => return false,
            SelectOutcome::Revealed(id) => {
                self.push_tile_update(id);
            }
            SelectOutcome::Matched { first, second } => {
                self.push_tile_update(first);
                self.push_tile_update(second);
                self.effects.push(Effect::PlayMatchFeedback);
                self.score.record_match();
                self.push_status();
                debug!(
                    "pair found ({}/{})",
                    self.score.pairs_found(),
                    self.score.target()
                );
                if self.score.is_won() {
                    info!("all {} pairs found", self.score.target());
                    self.win_timer_ms = Some(WIN_ANNOUNCE_DELAY_MS);
                }
            }
            SelectOutcome::Mismatched { first, second } => {
                self.push_tile_update(first);
                self.push_tile_update(second);
                self.mismatch_timer_ms = Some(MISMATCH_DELAY_MS);
                debug!("mismatch on tiles {} and {}", first, second);
            }
        }
        true
    }

    /// Advance the delay timers.
    ///
    /// Returns whether a delayed transition fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut fired = false;

        if let Some(remaining) = self.mismatch_timer_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.mismatch_timer_ms = None;
                if let Some(tiles) = self.turn.resolve_mismatch(&mut self.board) {
                    for id in tiles {
                        self.push_tile_update(id);
                    }
                }
                fired = true;
            } else {
                self.mismatch_timer_ms = Some(remaining);
            }
        }

        if let Some(remaining) = self.win_timer_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.win_timer_ms = None;
                self.win_announced = true;
                self.effects.push(Effect::AnnounceWin);
                fired = true;
            } else {
                self.win_timer_ms = Some(remaining);
            }
        }

        fired
    }

    /// Start a new round with the same pairs.
    ///
    /// The session is rebuilt from scratch: a fresh shuffle, a fresh index,
    /// zero pairs found and no pending timers. Queued effects of the old board
    /// are dropped with it.
    pub fn restart(&mut self) {
        let seed = self.rng.next_u32();
        let round = self.round.wrapping_add(1);
        *self = Self::new(self.prepared.clone(), seed);
        self.round = round;
        debug!("new round {} dealt with seed {}", round, seed);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        out.tiles.extend_from_slice(self.board.tiles());
        out.selected.clear();
        out.selected.extend_from_slice(self.turn.selected());
        out.phase = self.turn.phase();
        out.input_locked = self.turn.input_locked();
        out.pairs_found = self.score.pairs_found();
        out.target = self.score.target();
        out.won = self.score.is_won();
        out.win_announced = self.win_announced;
        out.round = self.round;
        out.seed = self.seed;
        out.timers = TimersSnapshot {
            mismatch_ms: self.mismatch_timer_ms.unwrap_or(0),
            win_ms: self.win_timer_ms.unwrap_or(0),
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn push_tile_update(&mut self, tile: TileId) {
        if let Some(t) = self.board.get(tile) {
            self.effects.push(Effect::UpdateTile {
                tile,
                flipped: t.flipped,
                matched: t.matched,
            });
        }
    }

    fn push_status(&mut self) {
        self.effects.push(Effect::RenderStatus {
            pairs_found: self.score.pairs_found(),
            target: self.score.target(),
        });
    }
}
