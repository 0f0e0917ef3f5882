//! The baseline conservative policy.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::combo::{Combo, ComboKind};
use crate::hand::Hand;

use super::search;
use super::{Decision, Strategy, TableView};

/// Always sheds the weakest sufficient combination.
///
/// Leads with the single lowest card, answers with the first match of an
/// ascending same-type scan, and reaches for a bomb only when the table is
/// a Two-high single or pair (or a bomb itself). Never passes when a legal
/// answer exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conservative;

impl Strategy for Conservative {
    fn decide(&self, hand: &Hand, view: &TableView<'_>) -> Decision {
        if hand.is_empty() {
            return Decision::Pass;
        }

        // The match opener plays the Three of Spades alone. If the card is
        // missing despite the flag, fall through to normal play.
        if view.is_first_turn && hand.contains(Card::OPENING) {
            return Decision::Play(vec![Card::OPENING]);
        }

        let Some(table) = view.combo else {
            return hand
                .lowest()
                .map_or(Decision::Pass, |card| Decision::Play(vec![card]));
        };

        let answer = match table.kind() {
            ComboKind::Single => beat_single(hand, table),
            ComboKind::Pair => beat_tuple(hand, table, 2),
            ComboKind::Triple => beat_tuple(hand, table, 3),
            ComboKind::Straight => beat_straight(hand, table),
            ComboKind::Quad | ComboKind::ConsecutivePairs => bomb_answer(hand, table),
        };

        answer
            .or_else(|| {
                table
                    .is_bombable()
                    .then(|| bomb_answer(hand, table))
                    .flatten()
            })
            .map_or(Decision::Pass, Decision::Play)
    }
}

/// Lowest single card that beats the table card.
fn beat_single(hand: &Hand, table: Combo) -> Option<Vec<Card>> {
    hand.cards()
        .iter()
        .find(|c| c.ordinal() > table.strength())
        .map(|&c| vec![c])
}

/// First rank strictly above the table's with `n` cards available.
fn beat_tuple(hand: &Hand, table: Combo, n: usize) -> Option<Vec<Card>> {
    let mut rank = table.high().rank.succ();
    while let Some(r) = rank {
        let cards = hand.of_rank(r);
        if cards.len() >= n {
            return Some(cards[..n].to_vec());
        }
        rank = r.succ();
    }
    None
}

/// Weakest same-length straight starting at or above the table straight's
/// top rank. Such a straight always tops the table one.
fn beat_straight(hand: &Hand, table: Combo) -> Option<Vec<Card>> {
    let len = table.size();
    let top = table.high().rank.index() as usize;
    if len > 12 {
        return None;
    }

    (top..=(12 - len)).find_map(|start| {
        let rank = Rank::from_index(start as u8)?;
        search::straight_from(hand, rank, len)
    })
}

/// Weakest bomb that beats the table: quads by ascending rank first, then
/// consecutive-pair runs by ascending length and rank.
fn bomb_answer(hand: &Hand, table: Combo) -> Option<Vec<Card>> {
    let beats_table =
        |cards: &Vec<Card>| Combo::classify(cards).is_some_and(|combo| combo.beats(table));

    search::tuples_of(hand, 4)
        .into_iter()
        .find(|cards| beats_table(cards))
        .or_else(|| {
            (3..=6).find_map(|pairs| {
                search::pair_runs(hand, pairs)
                    .into_iter()
                    .find(|cards| beats_table(cards))
            })
        })
}
