//! The scored evaluation policy.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::combo::{Combo, ComboKind};
use crate::hand::Hand;

use super::search;
use super::{Decision, Strategy, TableView};

/// Reward for a play that empties the hand and wins the game.
const EMPTY_HAND_BONUS: i32 = 1_000;
/// Penalty per Two spent outside a bomb or a winning play.
const TWO_PENALTY: i32 = 500;
/// Penalty per Ace spent outside a bomb or a winning play.
const ACE_PENALTY: i32 = 150;
/// Reward per card shed.
const SHED_REWARD: i32 = 25;
/// Answers scoring below this are declined in favor of a pass.
const KEEP_THRESHOLD: i32 = -200;
/// Opponents at or below this many cards force the best answer out anyway.
const PRESSURE_CARDS: usize = 2;

/// Scores every legal candidate and may pass to conserve high cards.
///
/// The scoring rewards hand-emptying and shedding, penalizes spending Twos
/// and Aces on ordinary tricks, and keeps the weakest of equally scored
/// answers. When not leading, a hand whose best answer scores below the
/// keep-threshold passes instead ("strategic pass") unless an opponent is
/// about to go out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scored;

impl Strategy for Scored {
    fn decide(&self, hand: &Hand, view: &TableView<'_>) -> Decision {
        if hand.is_empty() {
            return Decision::Pass;
        }

        let mut candidates = match view.combo {
            None => openings(hand),
            Some(table) => answers(hand, table),
        };

        // The match opener's play must include the Three of Spades.
        if view.is_first_turn && hand.contains(Card::OPENING) {
            candidates.retain(|cards| cards.contains(&Card::OPENING));
            if candidates.is_empty() {
                return Decision::Play(vec![Card::OPENING]);
            }
        }

        // Keep the first (weakest) of equally scored candidates.
        let mut best: Option<(i32, Vec<Card>)> = None;
        for cards in candidates {
            let candidate_score = score(hand, &cards);
            if best.as_ref().is_none_or(|(s, _)| candidate_score > *s) {
                best = Some((candidate_score, cards));
            }
        }

        match best {
            None => Decision::Pass,
            Some((best_score, cards)) => {
                let declinable = view.combo.is_some() && !under_pressure(view);
                if declinable && best_score < KEEP_THRESHOLD {
                    Decision::Pass
                } else {
                    Decision::Play(cards)
                }
            }
        }
    }
}

/// Every combination the hand could lead with.
fn openings(hand: &Hand) -> Vec<Vec<Card>> {
    let mut out: Vec<Vec<Card>> = hand.cards().iter().map(|&c| vec![c]).collect();
    out.extend(search::tuples_of(hand, 2));
    out.extend(search::tuples_of(hand, 3));
    out.extend(search::tuples_of(hand, 4));
    for len in 4..=12 {
        out.extend(search::straights_of_len(hand, len));
    }
    for pairs in 3..=6 {
        out.extend(search::pair_runs(hand, pairs));
    }
    out
}

/// Every combination the hand holds that beats the table.
fn answers(hand: &Hand, table: Combo) -> Vec<Vec<Card>> {
    let mut out = match table.kind() {
        ComboKind::Single => hand.cards().iter().map(|&c| vec![c]).collect(),
        ComboKind::Pair => search::tuples_of(hand, 2),
        ComboKind::Triple => search::tuples_of(hand, 3),
        ComboKind::Quad => search::tuples_of(hand, 4),
        ComboKind::Straight => search::straights_of_len(hand, table.size()),
        ComboKind::ConsecutivePairs => search::pair_runs(hand, table.size() / 2),
    };

    // Cross-type answers exist only against a Two-high single or pair.
    if table.is_bombable() {
        out.extend(search::tuples_of(hand, 4));
        for pairs in 3..=6 {
            out.extend(search::pair_runs(hand, pairs));
        }
    }

    out.retain(|cards| Combo::classify(cards).is_some_and(|combo| combo.beats(table)));
    out
}

fn score(hand: &Hand, cards: &[Card]) -> i32 {
    let mut total = SHED_REWARD * cards.len() as i32;

    if cards.len() == hand.len() {
        total += EMPTY_HAND_BONUS;
    } else {
        let bombing = Combo::classify(cards).is_some_and(Combo::is_bomb);
        if !bombing {
            for card in cards {
                total -= match card.rank {
                    Rank::Two => TWO_PENALTY,
                    Rank::Ace => ACE_PENALTY,
                    _ => 0,
                };
            }
        }
    }

    // Weaker representatives keep stronger cards in reserve.
    let strength = cards.iter().map(|c| i32::from(c.ordinal())).max().unwrap_or(0);
    total - strength
}

/// Whether any opponent is close enough to going out to force a play.
fn under_pressure(view: &TableView<'_>) -> bool {
    view.cards_left
        .iter()
        .enumerate()
        .any(|(player, &left)| player != view.player && left > 0 && left <= PRESSURE_CARDS)
}
