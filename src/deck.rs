//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
use crate::hand::Hand;

/// A full deck of 52 unique cards.
///
/// A deck is created fresh for each game, shuffled once, and consumed by
/// [`Deck::deal`]; ownership of its cards transfers to the dealt hands.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck in rank-then-suit order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck shuffled with the given seed.
    ///
    /// The same seed always produces the same order.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::standard();
        deck.cards.shuffle(&mut rng);
        deck
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals 13 cards to each of `players` hands, round-robin.
    ///
    /// The first card goes to player 0, the second to player 1, and so on.
    /// With fewer than four players the remaining cards are discarded with
    /// the deck.
    ///
    /// # Panics
    ///
    /// Panics if `players` is 0 or would require more than 52 cards.
    #[must_use]
    pub fn deal(self, players: usize) -> Vec<Hand> {
        assert!(players > 0 && players * HAND_SIZE <= DECK_SIZE);

        let mut hands: Vec<Hand> = (0..players).map(|_| Hand::new()).collect();
        for (i, card) in self.cards.into_iter().take(players * HAND_SIZE).enumerate() {
            hands[i % players].add_card(card);
        }
        hands
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
