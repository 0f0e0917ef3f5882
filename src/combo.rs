//! Combination classification and the beats relation.
//!
//! Every legality check in the game funnels through [`Combo::classify`] and
//! [`Combo::beats`]. Combinations are recomputed from raw cards whenever
//! needed; they carry no lifecycle of their own.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Combination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComboKind {
    /// A single card.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    Triple,
    /// Four or more cards of strictly consecutive ranks, Two excluded.
    Straight,
    /// Four cards of the same rank. Functions as a bomb.
    Quad,
    /// Three or more pairs of consecutive ranks. Functions as a bomb.
    ConsecutivePairs,
}

/// A classified combination.
///
/// `classify` returning `None` is the "invalid" verdict: the cards form no
/// playable combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    kind: ComboKind,
    size: usize,
    high: Card,
}

impl Combo {
    /// Classifies a set of cards, in any order.
    ///
    /// Returns `None` when the cards form no valid combination.
    #[must_use]
    pub fn classify(cards: &[Card]) -> Option<Self> {
        let mut sorted: Vec<Card> = cards.to_vec();
        sorted.sort_unstable();

        let kind = match sorted.len() {
            0 => return None,
            1 => ComboKind::Single,
            2 if all_same_rank(&sorted) => ComboKind::Pair,
            3 if all_same_rank(&sorted) => ComboKind::Triple,
            4 if all_same_rank(&sorted) => ComboKind::Quad,
            _ if is_straight(&sorted) => ComboKind::Straight,
            _ if is_consecutive_pairs(&sorted) => ComboKind::ConsecutivePairs,
            _ => return None,
        };

        let high = *sorted.last()?;
        Some(Self {
            kind,
            size: sorted.len(),
            high,
        })
    }

    /// Returns the combination type.
    #[must_use]
    pub const fn kind(self) -> ComboKind {
        self.kind
    }

    /// Returns the number of cards in the combination.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Returns the highest card, which represents the combination in
    /// strength comparisons.
    #[must_use]
    pub const fn high(self) -> Card {
        self.high
    }

    /// Returns the combination strength: the ordinal of its highest card.
    ///
    /// Only meaningful between combinations of the same type and size.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self.high.ordinal()
    }

    /// Returns whether this combination is a bomb.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self.kind, ComboKind::Quad | ComboKind::ConsecutivePairs)
    }

    /// Returns whether this combination legally beats `defender`.
    ///
    /// Same type: straights and pair runs must match in length, then the
    /// higher strength wins. Across types, only a bomb beats anything, and
    /// only a Two-high single or pair.
    #[must_use]
    pub fn beats(self, defender: Self) -> bool {
        if self.kind == defender.kind {
            if matches!(self.kind, ComboKind::Straight | ComboKind::ConsecutivePairs)
                && self.size != defender.size
            {
                return false;
            }
            return self.strength() > defender.strength();
        }

        self.is_bomb() && defender.is_bombable()
    }

    /// Returns whether a bomb may beat this combination: a single Two or a
    /// pair of Twos.
    #[must_use]
    pub fn is_bombable(self) -> bool {
        matches!(self.kind, ComboKind::Single | ComboKind::Pair) && self.high.rank == Rank::Two
    }
}

/// Returns whether the cards form any valid combination.
#[must_use]
pub fn is_valid(cards: &[Card]) -> bool {
    Combo::classify(cards).is_some()
}

/// Returns whether `attacker` legally beats `defender`, classifying both.
///
/// False whenever either side is not a valid combination.
#[must_use]
pub fn beats(attacker: &[Card], defender: &[Card]) -> bool {
    match (Combo::classify(attacker), Combo::classify(defender)) {
        (Some(a), Some(d)) => a.beats(d),
        _ => false,
    }
}

fn all_same_rank(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.rank == cards[0].rank)
}

/// Straight check over sorted cards: length at least 4, strictly consecutive
/// ranks, and no Two anywhere. A duplicate rank breaks the gap check.
fn is_straight(sorted: &[Card]) -> bool {
    if sorted.len() < 4 || sorted.iter().any(|c| c.rank == Rank::Two) {
        return false;
    }

    sorted
        .windows(2)
        .all(|w| w[1].rank.index() == w[0].rank.index() + 1)
}

/// Consecutive-pairs check over sorted cards: an even count of at least 6,
/// partitioned into same-rank pairs whose ranks ascend by exactly one.
fn is_consecutive_pairs(sorted: &[Card]) -> bool {
    if sorted.len() < 6 || sorted.len() % 2 != 0 {
        return false;
    }

    let pairs_aligned = sorted.chunks_exact(2).all(|p| p[0].rank == p[1].rank);
    if !pairs_aligned {
        return false;
    }

    let mut ranks = sorted.chunks_exact(2).map(|p| p[0].rank.index());
    let Some(first) = ranks.next() else {
        return false;
    };
    let mut prev = first;
    ranks.all(|r| {
        let ok = r == prev + 1;
        prev = r;
        ok
    })
}
