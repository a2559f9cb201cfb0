//! Error types for collection operations.

use thiserror::Error;

/// Errors that can occur when building a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A wildcard tile was passed; collections hold only normal tiles.
    #[error("wildcard tiles cannot be placed in a collection")]
    WildcardTile,
    /// The initial tiles do not form a valid run.
    #[error("initial tiles do not form a valid run")]
    InvalidRun,
    /// The initial tiles do not form a valid set.
    #[error("initial tiles do not form a valid set")]
    InvalidSet,
}

/// Errors that can occur when offering a tile to a collection.
///
/// A legal-but-rejected move is not an error; the add operations report it
/// as `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    /// A wildcard tile was passed; collections hold only normal tiles.
    #[error("wildcard tiles cannot be placed in a collection")]
    WildcardTile,
}
