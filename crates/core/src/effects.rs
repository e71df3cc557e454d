//! Effects module - delivering session effects to a presentation layer
//!
//! The session queues [`Effect`] values; a host drains them and hands them to
//! an [`EffectSink`]. The terminal front-end is one sink, tests use a
//! recording sink.

use crate::types::{Effect, TileId};

/// Receiver of the visible consequences of a game.
///
/// Every method has a no-op default so a sink only implements what it shows.
pub trait EffectSink {
    /// Lay out a fresh board; all tiles face-down.
    fn render_tiles(&mut self, _words: &[String]) {}

    fn update_tile(&mut self, _tile: TileId, _flipped: bool, _matched: bool) {}

    fn render_status(&mut self, _pairs_found: usize, _target: usize) {}

    /// A pair was found.
    fn play_match_feedback(&mut self) {}

    /// Shown once per game, after the win delay.
    fn announce_win(&mut self) {}
}

/// Route `effects` to `sink` in order.
pub fn dispatch<S, I>(sink: &mut S, effects: I)
where
    S: EffectSink + ?Sized,
    I: IntoIterator<Item = Effect>,
{
    for effect in effects {
        match effect {
            Effect::RenderTiles(words) => sink.render_tiles(&words),
            Effect::UpdateTile {
                tile,
                flipped,
                matched,
            } => sink.update_tile(tile, flipped, matched),
            Effect::RenderStatus {
                pairs_found,
                target,
            } => sink.render_status(pairs_found, target),
            Effect::PlayMatchFeedback => sink.play_match_feedback(),
            Effect::AnnounceWin => sink.announce_win(),
        }
    }
}

/// Sink that keeps every effect it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub effects: Vec<Effect>,
}

impl EffectSink for RecordingSink {
    fn render_tiles(&mut self, words: &[String]) {
        self.effects.push(Effect::RenderTiles(words.to_vec()));
    }

    fn update_tile(&mut self, tile: TileId, flipped: bool, matched: bool) {
        self.effects.push(Effect::UpdateTile {
            tile,
            flipped,
            matched,
        });
    }

    fn render_status(&mut self, pairs_found: usize, target: usize) {
        self.effects.push(Effect::RenderStatus {
            pairs_found,
            target,
        });
    }

    fn play_match_feedback(&mut self) {
        self.effects.push(Effect::PlayMatchFeedback);
    }

    fn announce_win(&mut self) {
        self.effects.push(Effect::AnnounceWin);
    }
}
