//! Draw pile and deck construction.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::options::DeckOptions;
use crate::tile::{DECK_SIZE, RANKS, SUITS, Tile};

/// A face-down pile of tiles that players draw from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawPile {
    /// Remaining tiles; the top of the pile is the end of the vec.
    tiles: Vec<Tile>,
}

impl DrawPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Creates a pile from pre-arranged tiles.
    ///
    /// The last tile in `tiles` is drawn first.
    #[must_use]
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Creates and shuffles a standard pile with the given seed.
    ///
    /// The pile holds `options.decks` full 52-tile decks plus
    /// `options.wildcards` wildcard tiles.
    ///
    /// # Example
    ///
    /// ```
    /// use rmrs::{DeckOptions, DrawPile};
    ///
    /// let pile = DrawPile::standard(DeckOptions::default(), 42);
    /// assert_eq!(pile.len(), 106);
    /// ```
    #[must_use]
    pub fn standard(options: DeckOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut tiles = Vec::with_capacity(
            options.decks as usize * DECK_SIZE + options.wildcards as usize,
        );

        for _ in 0..options.decks {
            for suit in SUITS {
                for rank in RANKS {
                    tiles.push(Tile::normal(suit, rank));
                }
            }
        }

        for _ in 0..options.wildcards {
            tiles.push(Tile::wildcard());
        }

        tiles.shuffle(&mut rng);
        Self { tiles }
    }

    /// Draws the top tile from the pile.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Returns the number of tiles remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
