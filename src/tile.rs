//! Tile types and deck constants.

use core::sync::atomic::{AtomicU32, Ordering};

/// Tile suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

/// All four suits, in deck-building order.
pub const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

/// Tile rank.
///
/// The discriminant is the rank's position in a run (1 = Ace, 13 = King).
/// Scoring values differ from positions; see [`crate::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

/// All thirteen ranks, in run order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Returns the rank's position in a run (1 = Ace, 13 = King).
    #[must_use]
    pub const fn position(self) -> u8 {
        self as u8
    }
}

/// Unique identifier for a physical tile.
///
/// Two tiles with equal suit and rank are still distinct tiles; collections
/// track membership by this id, never by face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u32);

/// Next tile ID to assign.
static NEXT_TILE_ID: AtomicU32 = AtomicU32::new(0);

impl TileId {
    fn next() -> Self {
        Self(NEXT_TILE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// A suit-and-rank tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalTile {
    id: TileId,
    suit: Suit,
    rank: Rank,
    /// Marks a tile currently standing in for a wildcard. Display-only.
    wildcard_stand_in: bool,
}

impl NormalTile {
    /// Creates a new tile with a fresh [`TileId`].
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: TileId::next(),
            suit,
            rank,
            wildcard_stand_in: false,
        }
    }

    /// Marks whether this tile stands in for a wildcard.
    ///
    /// The flag is presentational; validation and scoring ignore it.
    #[must_use]
    pub const fn with_wildcard_stand_in(mut self, stand_in: bool) -> Self {
        self.wildcard_stand_in = stand_in;
        self
    }

    /// Returns the tile's unique id.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Returns the tile's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the tile's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether this tile stands in for a wildcard.
    #[must_use]
    pub const fn is_wildcard_stand_in(&self) -> bool {
        self.wildcard_stand_in
    }
}

/// A wildcard (joker) tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WildcardTile {
    id: TileId,
}

impl WildcardTile {
    /// Creates a new wildcard tile with a fresh [`TileId`].
    #[must_use]
    pub fn new() -> Self {
        Self { id: TileId::next() }
    }

    /// Returns the tile's unique id.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }
}

impl Default for WildcardTile {
    fn default() -> Self {
        Self::new()
    }
}

/// A playable tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A suit-and-rank tile.
    Normal(NormalTile),
    /// A wildcard (joker) tile.
    Wildcard(WildcardTile),
}

impl Tile {
    /// Creates a new normal tile.
    #[must_use]
    pub fn normal(suit: Suit, rank: Rank) -> Self {
        Self::Normal(NormalTile::new(suit, rank))
    }

    /// Creates a new wildcard tile.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::Wildcard(WildcardTile::new())
    }

    /// Returns the tile's unique id.
    #[must_use]
    pub const fn id(&self) -> TileId {
        match self {
            Self::Normal(tile) => tile.id(),
            Self::Wildcard(tile) => tile.id(),
        }
    }

    /// Returns whether this tile is a wildcard.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }
}

impl From<NormalTile> for Tile {
    fn from(tile: NormalTile) -> Self {
        Self::Normal(tile)
    }
}

impl From<WildcardTile> for Tile {
    fn from(tile: WildcardTile) -> Self {
        Self::Wildcard(tile)
    }
}

/// Number of normal tiles per deck.
pub const DECK_SIZE: usize = 52;
