//! Classifier and comparator tests.

use tienlen::combo::{beats, is_valid};
use tienlen::{Card, Combo, ComboKind, Rank, Suit};

const fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn kind(cards: &[Card]) -> Option<ComboKind> {
    Combo::classify(cards).map(Combo::kind)
}

#[test]
fn classifies_singles_pairs_triples_quads() {
    assert_eq!(kind(&[c(Rank::Seven, Suit::Clubs)]), Some(ComboKind::Single));
    assert_eq!(
        kind(&[c(Rank::Seven, Suit::Clubs), c(Rank::Seven, Suit::Hearts)]),
        Some(ComboKind::Pair)
    );
    assert_eq!(
        kind(&[
            c(Rank::Queen, Suit::Spades),
            c(Rank::Queen, Suit::Clubs),
            c(Rank::Queen, Suit::Diamonds),
        ]),
        Some(ComboKind::Triple)
    );
    assert_eq!(
        kind(&[
            c(Rank::Five, Suit::Spades),
            c(Rank::Five, Suit::Clubs),
            c(Rank::Five, Suit::Diamonds),
            c(Rank::Five, Suit::Hearts),
        ]),
        Some(ComboKind::Quad)
    );
}

#[test]
fn rejects_malformed_sets() {
    assert_eq!(kind(&[]), None);
    assert_eq!(
        kind(&[c(Rank::Seven, Suit::Clubs), c(Rank::Eight, Suit::Clubs)]),
        None
    );
    assert_eq!(
        kind(&[
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Eight, Suit::Clubs),
        ]),
        None
    );
    assert!(!is_valid(&[c(Rank::Three, Suit::Spades), c(Rank::Four, Suit::Spades)]));
}

#[test]
fn classification_is_insensitive_to_order() {
    let shuffled = [
        c(Rank::Six, Suit::Hearts),
        c(Rank::Four, Suit::Spades),
        c(Rank::Seven, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
    ];
    assert_eq!(kind(&shuffled), Some(ComboKind::Straight));
}

#[test]
fn straights_need_four_consecutive_ranks() {
    let four = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Six, Suit::Diamonds),
        c(Rank::Seven, Suit::Hearts),
    ];
    assert_eq!(kind(&four), Some(ComboKind::Straight));

    // Three in a row is not a straight in this ruleset.
    assert_eq!(kind(&four[..3]), None);

    let gapped = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Seven, Suit::Diamonds),
        c(Rank::Eight, Suit::Hearts),
    ];
    assert_eq!(kind(&gapped), None);

    let duplicated_rank = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
        c(Rank::Six, Suit::Hearts),
        c(Rank::Seven, Suit::Hearts),
    ];
    assert_eq!(kind(&duplicated_rank), None);
}

#[test]
fn straights_never_contain_the_two() {
    let with_two = [
        c(Rank::Queen, Suit::Spades),
        c(Rank::King, Suit::Clubs),
        c(Rank::Ace, Suit::Diamonds),
        c(Rank::Two, Suit::Hearts),
    ];
    assert_eq!(kind(&with_two), None);

    // The same window one rank lower is fine.
    let to_ace = [
        c(Rank::Jack, Suit::Spades),
        c(Rank::Queen, Suit::Clubs),
        c(Rank::King, Suit::Diamonds),
        c(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(kind(&to_ace), Some(ComboKind::Straight));
}

#[test]
fn consecutive_pairs_need_three_aligned_pairs() {
    let three_pairs = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
        c(Rank::Six, Suit::Spades),
        c(Rank::Six, Suit::Hearts),
    ];
    assert_eq!(kind(&three_pairs), Some(ComboKind::ConsecutivePairs));

    // Two pairs are not enough.
    assert_eq!(kind(&three_pairs[..4]), None);

    let gapped = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Six, Suit::Clubs),
        c(Rank::Six, Suit::Diamonds),
        c(Rank::Seven, Suit::Spades),
        c(Rank::Seven, Suit::Hearts),
    ];
    assert_eq!(kind(&gapped), None);

    let odd = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
        c(Rank::Six, Suit::Spades),
    ];
    assert_eq!(kind(&odd), None);
}

#[test]
fn consecutive_pairs_may_end_in_twos() {
    // Only straights exclude the Two; a pair run may climb into it.
    let to_the_top = [
        c(Rank::King, Suit::Spades),
        c(Rank::King, Suit::Hearts),
        c(Rank::Ace, Suit::Clubs),
        c(Rank::Ace, Suit::Diamonds),
        c(Rank::Two, Suit::Spades),
        c(Rank::Two, Suit::Hearts),
    ];
    assert_eq!(kind(&to_the_top), Some(ComboKind::ConsecutivePairs));
}

#[test]
fn same_type_comparison_uses_rank_then_suit() {
    let seven = [c(Rank::Seven, Suit::Hearts)];
    let nine = [c(Rank::Nine, Suit::Spades)];
    assert!(beats(&nine, &seven));
    assert!(!beats(&seven, &nine));

    // Equal rank: the suit of the representative card decides.
    let nine_low = [c(Rank::Nine, Suit::Clubs)];
    assert!(beats(&nine, &nine_low));
    assert!(!beats(&nine_low, &nine));

    let pair_low = [c(Rank::Jack, Suit::Spades), c(Rank::Jack, Suit::Clubs)];
    let pair_high = [c(Rank::Jack, Suit::Diamonds), c(Rank::Jack, Suit::Hearts)];
    assert!(beats(&pair_high, &pair_low));
    assert!(!beats(&pair_low, &pair_high));
}

#[test]
fn straight_comparison_requires_equal_length() {
    let four_long = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Six, Suit::Diamonds),
        c(Rank::Seven, Suit::Hearts),
    ];
    let five_long = [
        c(Rank::Eight, Suit::Spades),
        c(Rank::Nine, Suit::Clubs),
        c(Rank::Ten, Suit::Diamonds),
        c(Rank::Jack, Suit::Hearts),
        c(Rank::Queen, Suit::Hearts),
    ];
    assert!(!beats(&five_long, &four_long));
    assert!(!beats(&four_long, &five_long));

    let higher_four_long = [
        c(Rank::Five, Suit::Spades),
        c(Rank::Six, Suit::Clubs),
        c(Rank::Seven, Suit::Diamonds),
        c(Rank::Eight, Suit::Hearts),
    ];
    assert!(beats(&higher_four_long, &four_long));
}

#[test]
fn beats_is_antisymmetric_within_a_type() {
    let combos = [
        [c(Rank::Nine, Suit::Spades), c(Rank::Nine, Suit::Hearts)],
        [c(Rank::Nine, Suit::Clubs), c(Rank::Nine, Suit::Diamonds)],
        [c(Rank::King, Suit::Spades), c(Rank::King, Suit::Clubs)],
    ];

    for a in &combos {
        for b in &combos {
            assert!(
                !(beats(a, b) && beats(b, a)),
                "{a:?} and {b:?} beat each other"
            );
            if !beats(a, b) && !beats(b, a) {
                let (ca, cb) = (
                    Combo::classify(a).unwrap(),
                    Combo::classify(b).unwrap(),
                );
                assert_eq!(ca.strength(), cb.strength());
            }
        }
    }
}

#[test]
fn bombs_only_answer_two_high_singles_and_pairs() {
    let quad = [
        c(Rank::Five, Suit::Spades),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
        c(Rank::Five, Suit::Hearts),
    ];
    let run = [
        c(Rank::Four, Suit::Spades),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
        c(Rank::Six, Suit::Spades),
        c(Rank::Six, Suit::Hearts),
    ];

    let single_two = [c(Rank::Two, Suit::Hearts)];
    let pair_of_twos = [c(Rank::Two, Suit::Spades), c(Rank::Two, Suit::Clubs)];
    assert!(beats(&quad, &single_two));
    assert!(beats(&quad, &pair_of_twos));
    assert!(beats(&run, &single_two));
    assert!(beats(&run, &pair_of_twos));

    // No override against anything below the Two.
    let single_ace = [c(Rank::Ace, Suit::Hearts)];
    let pair_of_kings = [c(Rank::King, Suit::Spades), c(Rank::King, Suit::Clubs)];
    let triple_of_twos = [
        c(Rank::Two, Suit::Spades),
        c(Rank::Two, Suit::Clubs),
        c(Rank::Two, Suit::Diamonds),
    ];
    assert!(!beats(&quad, &single_ace));
    assert!(!beats(&quad, &pair_of_kings));
    assert!(!beats(&quad, &triple_of_twos));
    assert!(!beats(&run, &single_ace));

    // Bombs of different types never answer each other.
    assert!(!beats(&quad, &run));
    assert!(!beats(&run, &quad));
}

#[test]
fn invalid_sides_never_beat() {
    let junk = [c(Rank::Four, Suit::Spades), c(Rank::Nine, Suit::Clubs)];
    let nine = [c(Rank::Nine, Suit::Spades)];
    assert!(!beats(&junk, &nine));
    assert!(!beats(&nine, &junk));
    assert!(!beats(&junk, &junk));
}

#[test]
fn strength_comes_from_the_highest_card() {
    let straight = [
        c(Rank::Four, Suit::Hearts),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Six, Suit::Diamonds),
        c(Rank::Seven, Suit::Spades),
    ];
    let combo = Combo::classify(&straight).unwrap();
    assert_eq!(combo.high(), c(Rank::Seven, Suit::Spades));
    assert_eq!(combo.strength(), c(Rank::Seven, Suit::Spades).ordinal());
    assert_eq!(combo.size(), 4);
    assert!(!combo.is_bomb());
}
