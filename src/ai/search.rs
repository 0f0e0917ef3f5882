//! Candidate enumeration over a hand.
//!
//! All enumerators emit candidates weakest first (ascending rank, lowest
//! suits chosen as representatives), so a first match is always the weakest
//! sufficient answer.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::hand::Hand;

/// Returns the lowest `n` cards of every rank holding at least `n` cards,
/// ascending by rank. `n` of 4 enumerates the hand's quads.
pub(super) fn tuples_of(hand: &Hand, n: usize) -> Vec<Vec<Card>> {
    Rank::ALL
        .iter()
        .filter_map(|&rank| {
            let cards = hand.of_rank(rank);
            (cards.len() >= n).then(|| cards[..n].to_vec())
        })
        .collect()
}

/// Builds the weakest straight of `len` cards starting at `start`: one card
/// per consecutive rank, lowest suit first. Fails if any rank is missing or
/// the run would touch the Two.
pub(super) fn straight_from(hand: &Hand, start: Rank, len: usize) -> Option<Vec<Card>> {
    let mut cards = Vec::with_capacity(len);
    let mut rank = start;
    for picked in 0..len {
        if rank == Rank::Two {
            return None;
        }
        cards.push(*hand.of_rank(rank).first()?);
        if picked + 1 < len {
            rank = rank.succ()?;
        }
    }
    Some(cards)
}

/// Returns one straight of exactly `len` cards per feasible starting rank,
/// ascending.
pub(super) fn straights_of_len(hand: &Hand, len: usize) -> Vec<Vec<Card>> {
    if !(4..=12).contains(&len) {
        return Vec::new();
    }

    (0..=(12 - len))
        .filter_map(|start| {
            let rank = Rank::from_index(start as u8)?;
            straight_from(hand, rank, len)
        })
        .collect()
}

/// Returns one run of `pairs` consecutive pairs per feasible starting rank,
/// ascending, taking the two lowest cards of each rank.
pub(super) fn pair_runs(hand: &Hand, pairs: usize) -> Vec<Vec<Card>> {
    if !(3..=6).contains(&pairs) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for start in 0..=(13 - pairs) {
        let mut cards = Vec::with_capacity(pairs * 2);
        let complete = (0..pairs).all(|offset| {
            Rank::from_index((start + offset) as u8).is_some_and(|rank| {
                let of_rank = hand.of_rank(rank);
                if of_rank.len() < 2 {
                    return false;
                }
                cards.extend_from_slice(&of_rank[..2]);
                true
            })
        });
        if complete {
            out.push(cards);
        }
    }
    out
}
