//! Board module - the dealt tiles
//!
//! A board holds two tiles per word pair in shuffled order. Tiles never move
//! after the deal, so a tile's index is its identity for the whole game.

use log::debug;

use crate::prepare::WordPair;
use crate::rng::SimpleRng;
use crate::types::TileId;

/// One playable tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    pub word: String,
    pub flipped: bool,
    pub matched: bool,
}

impl Tile {
    /// Create a face-down tile
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            flipped: false,
            matched: false,
        }
    }

    /// Face-down and not yet part of a found pair.
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }
}

/// Shuffled tile layout for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Deal `2 * pairs.len()` face-down tiles.
    ///
    /// Words are laid out pair by pair and then shuffled once.
    pub fn build(pairs: &[WordPair], rng: &mut SimpleRng) -> Self {
        let mut words: Vec<String> = Vec::with_capacity(pairs.len() * 2);
        for pair in pairs {
            words.push(pair.first.clone());
            words.push(pair.second.clone());
        }
        rng.shuffle(&mut words);

        debug!("dealt {} tiles", words.len());

        Self {
            tiles: words.into_iter().map(Tile::new).collect(),
        }
    }

    /// Board with tiles in the given order (no shuffle).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tiles: words.into_iter().map(Tile::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Words in board order.
    pub fn words(&self) -> Vec<String> {
        self.tiles.iter().map(|t| t.word.clone()).collect()
    }

    /// First tile id showing `word`.
    pub fn position_of(&self, word: &str) -> Option<TileId> {
        self.tiles.iter().position(|t| t.word == word)
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count()
    }

    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(|t| t.matched)
    }
}
