//! Set collections: one rank across suits.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::{AddError, BuildError};
use crate::tile::{NormalTile, Rank, Tile, TileId};

use super::require_normal;

/// Maximum number of tiles in a set: one per suit in a physical deck.
pub const SET_MAX_LEN: usize = 4;

/// A set: an unordered group of tiles sharing a single rank.
///
/// Membership is keyed by [`TileId`], so two physically distinct tiles of
/// the same suit and rank are never conflated. Suits may repeat; the set
/// only constrains rank and size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameRankCollection {
    /// Member tiles, keyed by identity.
    tiles: HashMap<TileId, NormalTile>,
    /// The rank every tile in the set must carry.
    rank: Rank,
}

impl SameRankCollection {
    /// Creates a set from starting tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if any tile is a wildcard, any tile's rank differs
    /// from `rank`, or more than [`SET_MAX_LEN`] distinct tiles are given.
    pub fn new(tiles: Vec<Tile>, rank: Rank) -> Result<Self, BuildError> {
        let mut members = HashMap::new();
        for tile in &tiles {
            let normal = match tile {
                Tile::Normal(normal) => normal,
                Tile::Wildcard(_) => return Err(BuildError::WildcardTile),
            };

            if normal.rank() != rank {
                return Err(BuildError::InvalidSet);
            }
            members.insert(normal.id(), *normal);
        }

        if members.len() > SET_MAX_LEN {
            return Err(BuildError::InvalidSet);
        }

        Ok(Self {
            tiles: members,
            rank,
        })
    }

    /// The single membership predicate both `can_add_*` accessors use.
    fn accepts(&self, tile: &NormalTile) -> bool {
        tile.rank() == self.rank
            && self.tiles.len() < SET_MAX_LEN
            && !self.tiles.contains_key(&tile.id())
    }

    /// The single insertion routine both `add_*` mutators use.
    fn insert(&mut self, tile: NormalTile) -> bool {
        if !self.accepts(&tile) {
            return false;
        }

        self.tiles.insert(tile.id(), tile);
        true
    }

    /// Returns whether the tile may join the set.
    ///
    /// Sets are unordered; front and back are equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn can_add_front(&self, tile: &Tile) -> Result<bool, AddError> {
        let normal = require_normal(tile)?;
        Ok(self.accepts(normal))
    }

    /// Returns whether the tile may join the set.
    ///
    /// Sets are unordered; front and back are equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn can_add_back(&self, tile: &Tile) -> Result<bool, AddError> {
        let normal = require_normal(tile)?;
        Ok(self.accepts(normal))
    }

    /// Adds the tile if its rank matches and the set has room.
    ///
    /// Returns `Ok(false)` and leaves the set unchanged when the move is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn add_front(&mut self, tile: Tile) -> Result<bool, AddError> {
        let normal = require_normal(&tile)?;
        Ok(self.insert(*normal))
    }

    /// Adds the tile if its rank matches and the set has room.
    ///
    /// Returns `Ok(false)` and leaves the set unchanged when the move is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn add_back(&mut self, tile: Tile) -> Result<bool, AddError> {
        let normal = require_normal(&tile)?;
        Ok(self.insert(*normal))
    }

    /// Returns whether the tile with the given id is a member.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Returns an iterator over the member tiles, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = &NormalTile> {
        self.tiles.values()
    }

    /// Returns the set's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the number of tiles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Sums the points of all tiles in the set.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles
            .values()
            .map(|tile| u32::from(tile.score()))
            .sum()
    }
}
