//! Game state types.

/// Game state.
///
/// "Round over" is a derived condition, not a state: a round ends the moment
/// every other active player has passed, and the engine resets it in the
/// same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Awaiting a play or pass from the current player.
    InProgress,
    /// A hand emptied; the winner is recorded.
    Finished,
}

/// A fixed-size set of player indices.
///
/// Backed by a byte, which covers the 2 to 4 seats this ruleset supports
/// with room to spare. Used for the per-round passed flags and the active
/// (non-empty-handed) flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSet(u8);

impl PlayerSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a set holding players `0..players`.
    #[must_use]
    pub const fn all(players: usize) -> Self {
        Self((1u8 << players) - 1)
    }

    /// Adds a player to the set.
    pub const fn insert(&mut self, player: usize) {
        self.0 |= 1 << player;
    }

    /// Removes a player from the set.
    pub const fn remove(&mut self, player: usize) {
        self.0 &= !(1 << player);
    }

    /// Returns whether the set contains the player.
    #[must_use]
    pub const fn contains(self, player: usize) -> bool {
        self.0 & (1 << player) != 0
    }

    /// Returns the number of players in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Removes all players from the set.
    pub const fn clear(&mut self) {
        self.0 = 0;
    }
}
