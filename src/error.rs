//! Error types for game operations.
//!
//! Every rejection is local and recoverable: the session state is unchanged
//! whenever an operation returns `Err`.

use thiserror::Error;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Unsupported number of players (2 to 4 are allowed).
    #[error("unsupported number of players")]
    InvalidPlayerCount,
    /// A provided hand does not hold 13 cards.
    #[error("each hand must hold 13 cards")]
    WrongHandSize,
    /// The same card appears in more than one hand.
    #[error("duplicate card across hands")]
    DuplicateCard,
}

/// Errors that can occur when submitting a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The cards form no valid combination.
    #[error("cards form no valid combination")]
    InvalidCombo,
    /// The combination does not beat the table combination.
    #[error("does not beat the table")]
    DoesNotBeatTable,
    /// The very first play of the match must include the Three of Spades.
    #[error("must include the opening card")]
    MustIncludeOpeningCard,
    /// The player does not hold all of the submitted cards.
    #[error("cards not in hand")]
    CardsNotInHand,
}

/// Errors that can occur when passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The round leader must open with a play, not a pass.
    #[error("round leader must play")]
    MustLead,
}
