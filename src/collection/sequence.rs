//! Run collections: consecutive ranks in a single suit.

use alloc::vec::Vec;

use crate::error::{AddError, BuildError};
use crate::tile::{NormalTile, Rank, Suit, Tile};

use super::require_normal;

/// Minimum number of tiles in a valid run.
pub const RUN_MIN_LEN: usize = 3;

/// Maximum number of tiles in a valid run: all thirteen ranks plus the ace
/// that may close the run again after the king.
pub const RUN_MAX_LEN: usize = 14;

/// Checks whether `tiles` form a valid run of `suit`.
fn is_valid_run(tiles: &[NormalTile], suit: Suit) -> bool {
    if tiles.len() < RUN_MIN_LEN || tiles.len() > RUN_MAX_LEN {
        return false;
    }

    if tiles.iter().any(|tile| tile.suit() != suit) {
        return false;
    }

    let last_pair = tiles.len() - 2;
    for (i, pair) in tiles.windows(2).enumerate() {
        let (curr, next) = (pair[0], pair[1]);
        if curr.rank().position() + 1 == next.rank().position() {
            continue;
        }

        // The ace may follow the king, but only as the final pair of the
        // run. A king-to-ace step anywhere earlier is not a valid wrap.
        let terminal_wrap =
            i == last_pair && curr.rank() == Rank::King && next.rank() == Rank::Ace;
        if !terminal_wrap {
            return false;
        }
    }

    true
}

/// A run: an ordered sequence of consecutive same-suit tiles.
///
/// Tiles are ordered by ascending rank position, with the single exception
/// of an ace closing the run after a king.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCollection {
    /// Tiles in run order, front first.
    tiles: Vec<NormalTile>,
    /// The suit every tile in the run must carry.
    suit: Suit,
}

impl SequenceCollection {
    /// Creates a run from starting tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if any tile is a wildcard or the tiles do not
    /// already form a valid run of `suit`.
    pub fn new(tiles: Vec<Tile>, suit: Suit) -> Result<Self, BuildError> {
        let mut normals = Vec::with_capacity(tiles.len());
        for tile in &tiles {
            match tile {
                Tile::Normal(normal) => normals.push(*normal),
                Tile::Wildcard(_) => return Err(BuildError::WildcardTile),
            }
        }

        if !is_valid_run(&normals, suit) {
            return Err(BuildError::InvalidRun);
        }

        Ok(Self {
            tiles: normals,
            suit,
        })
    }

    /// Builds the hypothetical run produced by a front insertion.
    fn candidate_front(&self, tile: NormalTile) -> Vec<NormalTile> {
        let mut candidate = Vec::with_capacity(self.tiles.len() + 1);
        candidate.push(tile);
        candidate.extend_from_slice(&self.tiles);
        candidate
    }

    /// Builds the hypothetical run produced by a back insertion.
    fn candidate_back(&self, tile: NormalTile) -> Vec<NormalTile> {
        let mut candidate = self.tiles.clone();
        candidate.push(tile);
        candidate
    }

    /// Returns whether the tile may join at the front.
    ///
    /// The whole hypothetical run is revalidated, so the length bound and
    /// the wraparound rule apply uniformly regardless of insertion end.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn can_add_front(&self, tile: &Tile) -> Result<bool, AddError> {
        let normal = require_normal(tile)?;
        Ok(is_valid_run(&self.candidate_front(*normal), self.suit))
    }

    /// Returns whether the tile may join at the back.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn can_add_back(&self, tile: &Tile) -> Result<bool, AddError> {
        let normal = require_normal(tile)?;
        Ok(is_valid_run(&self.candidate_back(*normal), self.suit))
    }

    /// Adds the tile at the front if the resulting run stays valid.
    ///
    /// Returns `Ok(false)` and leaves the run unchanged when the move is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn add_front(&mut self, tile: Tile) -> Result<bool, AddError> {
        let normal = require_normal(&tile)?;
        if !is_valid_run(&self.candidate_front(*normal), self.suit) {
            return Ok(false);
        }

        self.tiles.insert(0, *normal);
        Ok(true)
    }

    /// Adds the tile at the back if the resulting run stays valid.
    ///
    /// Returns `Ok(false)` and leaves the run unchanged when the move is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn add_back(&mut self, tile: Tile) -> Result<bool, AddError> {
        let normal = require_normal(&tile)?;
        if !is_valid_run(&self.candidate_back(*normal), self.suit) {
            return Ok(false);
        }

        self.tiles.push(*normal);
        Ok(true)
    }

    /// Returns the tiles in run order.
    #[must_use]
    pub fn tiles(&self) -> &[NormalTile] {
        &self.tiles
    }

    /// Returns the run's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the number of tiles in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns whether the run is empty. Always false for a built run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Sums the points of all tiles in the run.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles.iter().map(|tile| u32::from(tile.score())).sum()
    }
}
