//! Table collections and the shared add contract.
//!
//! A [`Collection`] is a validated group of normal tiles on the table,
//! either a run ([`SequenceCollection`]) or a set ([`SameRankCollection`]).
//! Every collection satisfies its validity rules at every observable point:
//! the four add operations are the only mutators, and each one commits only
//! when the whole resulting group would still be valid.
//!
//! The `can_add_*` operations are side-effect-free and safe to call
//! speculatively. A rejected move is the `Ok(false)` outcome, never an
//! error; only offering a wildcard tile fails with [`AddError`].

mod same_rank;
mod sequence;

pub use same_rank::{SET_MAX_LEN, SameRankCollection};
pub use sequence::{RUN_MAX_LEN, RUN_MIN_LEN, SequenceCollection};

use crate::error::AddError;
use crate::tile::{NormalTile, Tile};

/// Screens wildcards out of the add operations.
pub(crate) const fn require_normal(tile: &Tile) -> Result<&NormalTile, AddError> {
    match tile {
        Tile::Normal(normal) => Ok(normal),
        Tile::Wildcard(_) => Err(AddError::WildcardTile),
    }
}

/// A validated group of tiles on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// A run: consecutive ranks in a single suit.
    Sequence(SequenceCollection),
    /// A set: a single rank across suits.
    SameRank(SameRankCollection),
}

impl Collection {
    /// Returns whether the tile may join at the front.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn can_add_front(&self, tile: &Tile) -> Result<bool, AddError> {
        match self {
            Self::Sequence(run) => run.can_add_front(tile),
            Self::SameRank(set) => set.can_add_front(tile),
        }
    }

    /// Returns whether the tile may join at the back.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn can_add_back(&self, tile: &Tile) -> Result<bool, AddError> {
        match self {
            Self::Sequence(run) => run.can_add_back(tile),
            Self::SameRank(set) => set.can_add_back(tile),
        }
    }

    /// Adds the tile at the front if the move is legal.
    ///
    /// Returns `Ok(false)` and leaves the collection unchanged when the
    /// move is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn add_front(&mut self, tile: Tile) -> Result<bool, AddError> {
        match self {
            Self::Sequence(run) => run.add_front(tile),
            Self::SameRank(set) => set.add_front(tile),
        }
    }

    /// Adds the tile at the back if the move is legal.
    ///
    /// Returns `Ok(false)` and leaves the collection unchanged when the
    /// move is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is a wildcard.
    pub fn add_back(&mut self, tile: Tile) -> Result<bool, AddError> {
        match self {
            Self::Sequence(run) => run.add_back(tile),
            Self::SameRank(set) => set.add_back(tile),
        }
    }

    /// Returns the number of tiles in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(run) => run.len(),
            Self::SameRank(set) => set.len(),
        }
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sums the points of all tiles in the collection.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            Self::Sequence(run) => run.score(),
            Self::SameRank(set) => set.score(),
        }
    }
}

impl From<SequenceCollection> for Collection {
    fn from(run: SequenceCollection) -> Self {
        Self::Sequence(run)
    }
}

impl From<SameRankCollection> for Collection {
    fn from(set: SameRankCollection) -> Self {
        Self::SameRank(set)
    }
}
