//! Terminal side of the game effects.
//!
//! Views draw from snapshots, so most effects only mark the screen dirty.
//! The ones with no visual state of their own are queued here: bells for
//! found pairs and a new layout when a board is dealt.

use log::info;

use crate::core::EffectSink;
use crate::types::TileId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFeedback {
    bells: u32,
    dealt: Option<usize>,
    dirty: bool,
}

impl TermFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bells requested since the last call.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.bells)
    }

    /// Tile count of a board dealt since the last call.
    pub fn take_dealt(&mut self) -> Option<usize> {
        self.dealt.take()
    }

    /// Whether anything visible changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl EffectSink for TermFeedback {
    fn render_tiles(&mut self, words: &[String]) {
        self.dealt = Some(words.len());
        self.dirty = true;
    }

    fn update_tile(&mut self, _tile: TileId, _flipped: bool, _matched: bool) {
        self.dirty = true;
    }

    fn render_status(&mut self, _pairs_found: usize, _target: usize) {
        self.dirty = true;
    }

    fn play_match_feedback(&mut self) {
        self.bells = self.bells.saturating_add(1);
    }

    fn announce_win(&mut self) {
        info!("win announced");
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch;
    use crate::types::Effect;

    #[test]
    fn collects_bells_and_layout() {
        let mut fb = TermFeedback::new();
        dispatch(
            &mut fb,
            vec![
                Effect::RenderTiles(vec!["a".into(), "b".into()]),
                Effect::PlayMatchFeedback,
                Effect::PlayMatchFeedback,
            ],
        );
        assert_eq!(fb.take_dealt(), Some(2));
        assert_eq!(fb.take_bells(), 2);
        assert!(fb.take_dirty());

        assert_eq!(fb.take_dealt(), None);
        assert_eq!(fb.take_bells(), 0);
        assert!(!fb.take_dirty());
    }

    #[test]
    fn mismatch_updates_are_silent() {
        let mut fb = TermFeedback::new();
        dispatch(
            &mut fb,
            vec![Effect::UpdateTile {
                tile: 0,
                flipped: false,
                matched: false,
            }],
        );
        assert_eq!(fb.take_bells(), 0);
        assert!(fb.take_dirty());
    }
}
