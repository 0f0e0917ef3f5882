//! Notifications produced by accepted game actions.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A notification for the orchestrating layer.
///
/// Accepted plays and passes return the events they caused, in order. The
/// engine pushes no events on rejected actions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A play was accepted and placed on the table.
    PlayAccepted {
        /// The player who played.
        player: usize,
        /// The cards placed, ascending.
        cards: Vec<Card>,
        /// Whether this play opened the round (the table was empty).
        opened_round: bool,
    },
    /// A player passed for the rest of the round.
    Passed {
        /// The player who passed.
        player: usize,
    },
    /// All other active players passed; the round was reset.
    RoundReset {
        /// The winner of the round, who leads the next one.
        leader: usize,
    },
    /// The turn moved to a new player.
    TurnChanged {
        /// The player now expected to act.
        player: usize,
    },
    /// A hand emptied and the game ended.
    GameEnded {
        /// The winning player.
        winner: usize,
    },
}
