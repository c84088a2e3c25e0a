//! Game configuration options.

extern crate alloc;

use alloc::string::String;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tablejack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_player_name("Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in each round's shoe.
    pub decks: u8,
    /// Name of the human player, used in settlement messages.
    pub player_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            player_name: String::from("Player"),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the human player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Alice");
    /// assert_eq!(options.player_name, "Alice");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}
