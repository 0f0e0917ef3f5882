//! Game configuration options.

/// Decision policy used for AI-controlled seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum AiStrategy {
    /// Always sheds the weakest sufficient combination; never passes when a
    /// legal same-type answer exists.
    #[default]
    Conservative,
    /// Scores every legal candidate and may pass to conserve high cards.
    Scored,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tienlen::{AiStrategy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_strategy(AiStrategy::Scored);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players (2 to 4).
    pub players: usize,
    /// Decision policy for AI-controlled seats.
    pub strategy: AiStrategy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 4,
            strategy: AiStrategy::Conservative,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the AI decision policy.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::{AiStrategy, GameOptions};
    ///
    /// let options = GameOptions::default().with_strategy(AiStrategy::Scored);
    /// assert_eq!(options.strategy, AiStrategy::Scored);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: AiStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
