//! A rummy tile melding and scoring engine with optional `no_std` support.
//!
//! The crate provides the table-side rules core for Rummikub-family games:
//! [`Tile`] values, validated [`Collection`] groupings (runs of consecutive
//! same-suit ranks and sets of one rank across suits) that stay valid through
//! every mutation, and the tile scoring table.
//!
//! # Example
//!
//! ```
//! use rmrs::{Collection, Rank, SequenceCollection, Suit, Tile};
//!
//! let run = SequenceCollection::new(
//!     vec![
//!         Tile::normal(Suit::Spade, Rank::Queen),
//!         Tile::normal(Suit::Spade, Rank::King),
//!         Tile::normal(Suit::Spade, Rank::Ace),
//!     ],
//!     Suit::Spade,
//! )
//! .expect("a queen-king-ace run is valid");
//!
//! let mut table = Collection::from(run);
//! let jack = Tile::normal(Suit::Spade, Rank::Jack);
//! assert_eq!(table.can_add_front(&jack), Ok(true));
//! assert_eq!(table.add_front(jack), Ok(true));
//! assert_eq!(table.len(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod collection;
pub mod error;
pub mod hand;
pub mod options;
pub mod pile;
pub mod score;
pub mod tile;

// Re-export main types
pub use collection::{
    Collection, RUN_MAX_LEN, RUN_MIN_LEN, SET_MAX_LEN, SameRankCollection, SequenceCollection,
};
pub use error::{AddError, BuildError};
pub use hand::Hand;
pub use options::DeckOptions;
pub use pile::DrawPile;
pub use score::{WILDCARD_SCORE, rank_score, tile_score};
pub use tile::{DECK_SIZE, NormalTile, RANKS, Rank, SUITS, Suit, Tile, TileId, WildcardTile};
