//! Player hand container.

extern crate alloc;

use alloc::vec::Vec;

use crate::tile::{Tile, TileId};

/// An ordered collection of tiles held by a single player.
///
/// The hand imposes no validity rules of its own; it only holds tiles that
/// have not yet been played onto the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Tiles in the hand.
    tiles: Vec<Tile>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Creates a hand from starting tiles.
    #[must_use]
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Adds a tile to the back of the hand.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Removes and returns the tile with the given id, if held.
    pub fn take(&mut self, id: TileId) -> Option<Tile> {
        let index = self.tiles.iter().position(|tile| tile.id() == id)?;
        Some(self.tiles.remove(index))
    }

    /// Returns the tiles in the hand.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the number of tiles in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Sums the points of all held tiles.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles.iter().map(|tile| u32::from(tile.score())).sum()
    }
}
