//! Tile scoring table.
//!
//! Scoring values are independent of run positions: the Ace sequences lowest
//! but scores highest among normal tiles, and the court ranks flatten to 10.

use crate::tile::{NormalTile, Rank, Tile};

/// Points a wildcard tile is worth.
pub const WILDCARD_SCORE: u8 = 20;

/// Returns the points a rank is worth.
#[must_use]
pub const fn rank_score(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 15,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Returns the points a tile is worth.
#[must_use]
pub const fn tile_score(tile: &Tile) -> u8 {
    match tile {
        Tile::Normal(tile) => rank_score(tile.rank()),
        Tile::Wildcard(_) => WILDCARD_SCORE,
    }
}

impl NormalTile {
    /// Returns the points this tile is worth.
    #[must_use]
    pub const fn score(&self) -> u8 {
        rank_score(self.rank())
    }
}

impl Tile {
    /// Returns the points this tile is worth.
    #[must_use]
    pub const fn score(&self) -> u8 {
        tile_score(self)
    }
}
