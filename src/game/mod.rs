//! Game session and state management.

extern crate alloc;

use alloc::vec::Vec;

use crate::ai::{Decision, TableView};
use crate::card::{Card, HAND_SIZE};
use crate::combo::Combo;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
pub mod state;

pub use state::{GameState, PlayerSet};

/// A Tien Len game session.
///
/// The session owns the hands and all turn and round state. It replaces any
/// ambient orchestrator: every operation takes its state explicitly, and
/// callers drive the game one validated action at a time. AI seats go
/// through [`Game::decide_for`] and apply the result with the same
/// [`play`](Game::play)/[`pass`](Game::pass) calls a human move uses.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Player hands, indexed by seat.
    ///
    /// Exposed for orchestrators; the engine itself only mutates hands
    /// through validated plays.
    pub hands: Vec<Hand>,
    /// The most recent accepted play; empty when a round is open for a lead.
    table: Vec<Card>,
    current_player: usize,
    passed: PlayerSet,
    active: PlayerSet,
    consecutive_passes: usize,
    last_player_to_play: Option<usize>,
    first_turn: bool,
    winner: Option<usize>,
    state: GameState,
}

impl Game {
    /// Creates a game with a seeded shuffle and deal.
    ///
    /// The same seed always produces the same deal. The opening turn goes to
    /// the holder of the Three of Spades, or to the holder of the lowest
    /// dealt card when the opening card stayed in the deck (possible only
    /// with fewer than four players).
    ///
    /// # Errors
    ///
    /// Returns an error if the configured player count is outside 2..=4.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        if !(2..=4).contains(&options.players) {
            return Err(SetupError::InvalidPlayerCount);
        }

        let hands = Deck::shuffled(seed).deal(options.players);
        Ok(Self::with_dealt_hands(options, hands))
    }

    /// Creates a game from pre-dealt hands.
    ///
    /// Intended for orchestrators that deal elsewhere and for deterministic
    /// tests. Hands must agree with the configured player count, hold 13
    /// cards each, and share no card.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand count is outside 2..=4 or disagrees with
    /// the options, a hand does not hold 13 cards, or a card appears twice.
    pub fn from_hands(options: GameOptions, hands: Vec<Hand>) -> Result<Self, SetupError> {
        if !(2..=4).contains(&hands.len()) || hands.len() != options.players {
            return Err(SetupError::InvalidPlayerCount);
        }
        if hands.iter().any(|h| h.len() != HAND_SIZE) {
            return Err(SetupError::WrongHandSize);
        }

        let mut seen = 0u64;
        for card in hands.iter().flat_map(|h| h.cards()) {
            let bit = 1u64 << card.ordinal();
            if seen & bit != 0 {
                return Err(SetupError::DuplicateCard);
            }
            seen |= bit;
        }

        Ok(Self::with_dealt_hands(options, hands))
    }

    fn with_dealt_hands(options: GameOptions, hands: Vec<Hand>) -> Self {
        let opener = hands
            .iter()
            .position(|h| h.contains(Card::OPENING))
            .unwrap_or_else(|| Self::lowest_card_holder(&hands));

        Self {
            options,
            active: PlayerSet::all(hands.len()),
            hands,
            table: Vec::new(),
            current_player: opener,
            passed: PlayerSet::new(),
            consecutive_passes: 0,
            last_player_to_play: None,
            first_turn: true,
            winner: None,
            state: GameState::InProgress,
        }
    }

    fn lowest_card_holder(hands: &[Hand]) -> usize {
        let mut holder = 0;
        let mut lowest = None;
        for (i, hand) in hands.iter().enumerate() {
            if let Some(card) = hand.lowest() {
                if lowest.is_none_or(|l| card < l) {
                    lowest = Some(card);
                    holder = i;
                }
            }
        }
        holder
    }

    /// Returns the number of seats in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns a player's hand.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns the cards of the most recent accepted play, ascending.
    ///
    /// Empty when the current round is open for a lead.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// Classifies the table combination, if any.
    #[must_use]
    pub fn table_combo(&self) -> Option<Combo> {
        Combo::classify(&self.table)
    }

    /// Returns the player expected to act.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the winner once the game has finished.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns whether the very first play of the match is still pending.
    #[must_use]
    pub const fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn is_active(&self, player: usize) -> bool {
        self.active.contains(player)
    }

    /// Returns whether the player has passed this round.
    #[must_use]
    pub fn has_passed(&self, player: usize) -> bool {
        self.passed.contains(player)
    }

    /// Returns the number of passes since the last accepted play.
    #[must_use]
    pub const fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// Returns the player whose play currently holds the table.
    ///
    /// `None` when nobody has played since the last round reset.
    #[must_use]
    pub const fn last_player_to_play(&self) -> Option<usize> {
        self.last_player_to_play
    }

    /// Marks a player as out of the game.
    ///
    /// The engine does this itself when a hand empties; the method remains
    /// for orchestrators generalizing beyond the first-empty-hand win.
    pub fn mark_player_inactive(&mut self, player: usize) {
        self.active.remove(player);
    }

    /// Declares the last remaining active player the winner.
    ///
    /// A defensive secondary check: in this ruleset the game normally ends
    /// the moment a hand empties, inside [`play`](Game::play).
    pub fn check_game_over(&mut self) -> bool {
        if self.active.len() != 1 {
            return false;
        }

        let survivor = (0..self.player_count()).find(|&p| self.active.contains(p));
        self.winner = survivor;
        self.state = GameState::Finished;
        true
    }

    /// Resets the per-round state after a round is awarded.
    ///
    /// Clears the passed flags, the table, the pass counter, and the
    /// round's last player. Leaves the turn cursor unchanged; the caller
    /// (or the engine's own round-award path) hands the lead to the round
    /// winner. Idempotent.
    pub fn reset_round(&mut self) {
        self.passed.clear();
        self.table.clear();
        self.consecutive_passes = 0;
        self.last_player_to_play = None;
    }

    /// Runs the configured AI strategy for the given seat.
    ///
    /// Pure: the session is not touched. Apply the decision through
    /// [`play`](Game::play) or [`pass`](Game::pass), exactly as a human
    /// move would be.
    #[must_use]
    pub fn decide_for(&self, player: usize) -> Option<Decision> {
        let hand = self.hands.get(player)?;
        let cards_left: Vec<usize> = self.hands.iter().map(Hand::len).collect();
        let view = TableView {
            table: &self.table,
            combo: self.table_combo(),
            is_first_turn: self.first_turn,
            cards_left: &cards_left,
            player,
        };
        Some(self.options.strategy.build().decide(hand, &view))
    }
}
