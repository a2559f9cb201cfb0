//! Deck configuration options.

/// Configuration options for building a draw pile.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rmrs::DeckOptions;
///
/// let options = DeckOptions::default().with_decks(1).with_wildcards(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of 52-tile decks.
    pub decks: u8,
    /// Number of wildcard tiles mixed in.
    pub wildcards: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            wildcards: 2,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use rmrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of wildcard tiles.
    ///
    /// # Example
    ///
    /// ```
    /// use rmrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_wildcards(4);
    /// assert_eq!(options.wildcards, 4);
    /// ```
    #[must_use]
    pub const fn with_wildcards(mut self, wildcards: u8) -> Self {
        self.wildcards = wildcards;
        self
    }
}
