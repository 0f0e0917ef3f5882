use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::combo::Combo;
use crate::error::{PassError, PlayError};
use crate::event::GameEvent;

use super::{Game, GameState};

impl Game {
    /// Submits a play for the given player.
    ///
    /// Validation order: turn, combination shape, the first-turn opening
    /// card, the beats relation against the table, and card availability.
    /// On success the cards move from the hand to the table and the returned
    /// events describe everything that followed, including a game end when
    /// the hand emptied.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not this player's turn,
    /// the cards form no combination, the combination does not beat the
    /// table, the mandatory opening card is missing from the match's first
    /// play, or the player does not hold all of the cards. The session is
    /// unchanged on any error.
    pub fn play(&mut self, player: usize, cards: &[Card]) -> Result<Vec<GameEvent>, PlayError> {
        if self.state != GameState::InProgress {
            return Err(PlayError::GameOver);
        }
        if player != self.current_player {
            return Err(PlayError::NotYourTurn);
        }

        let combo = Combo::classify(cards).ok_or(PlayError::InvalidCombo)?;

        // The match's first play must include the Three of Spades whenever
        // the acting player holds it. The holder always opens, so this only
        // ever binds the opener; the card can stay undealt with fewer than
        // four players, in which case the rule is moot.
        if self.first_turn
            && self.hands[player].contains(Card::OPENING)
            && !cards.contains(&Card::OPENING)
        {
            return Err(PlayError::MustIncludeOpeningCard);
        }

        if let Some(table) = self.table_combo() {
            if !combo.beats(table) {
                return Err(PlayError::DoesNotBeatTable);
            }
        }

        let opened_round = self.table.is_empty();
        if !self.hands[player].remove_all(cards) {
            return Err(PlayError::CardsNotInHand);
        }

        // Committed from here on.
        self.passed.remove(player);
        self.consecutive_passes = 0;
        self.last_player_to_play = Some(player);
        self.first_turn = false;
        self.table = cards.to_vec();
        self.table.sort_unstable();

        let mut events = vec![GameEvent::PlayAccepted {
            player,
            cards: self.table.clone(),
            opened_round,
        }];

        if self.hands[player].is_empty() {
            self.active.remove(player);
            self.winner = Some(player);
            self.state = GameState::Finished;
            events.push(GameEvent::GameEnded { winner: player });
            return Ok(events);
        }

        self.next_player();
        events.push(GameEvent::TurnChanged {
            player: self.current_player,
        });
        Ok(events)
    }

    /// Submits a pass for the given player.
    ///
    /// A pass lasts for the rest of the round. When it leaves the last
    /// player to play as the only non-passed active player, the round is
    /// awarded on the spot: the per-round state resets and the lead moves to
    /// the round winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not this player's turn,
    /// or the table is empty (the round leader must open with a play). The
    /// session is unchanged on any error.
    pub fn pass(&mut self, player: usize) -> Result<Vec<GameEvent>, PassError> {
        if self.state != GameState::InProgress {
            return Err(PassError::GameOver);
        }
        if player != self.current_player {
            return Err(PassError::NotYourTurn);
        }
        if self.table.is_empty() {
            return Err(PassError::MustLead);
        }

        self.passed.insert(player);
        self.consecutive_passes += 1;
        if self.consecutive_passes >= self.active.len() {
            log::warn!(
                "consecutive passes ({}) reached the active player count without a round reset",
                self.consecutive_passes
            );
            debug_assert!(false, "missed round reset");
        }

        let mut events = vec![GameEvent::Passed { player }];

        if let Some(leader) = self.round_winner() {
            self.reset_round();
            self.current_player = leader;
            events.push(GameEvent::RoundReset { leader });
            events.push(GameEvent::TurnChanged { player: leader });
        } else {
            self.next_player();
            events.push(GameEvent::TurnChanged {
                player: self.current_player,
            });
        }
        Ok(events)
    }

    /// Returns whether every active player other than the last one to play
    /// has passed this round.
    ///
    /// False while nobody has played this round.
    #[must_use]
    pub fn all_others_passed(&self) -> bool {
        self.round_winner().is_some()
    }

    /// Returns the round winner once every other active player has passed.
    fn round_winner(&self) -> Option<usize> {
        let leader = self.last_player_to_play?;
        let all_passed = (0..self.player_count())
            .filter(|&p| p != leader && self.active.contains(p))
            .all(|p| self.passed.contains(p));
        all_passed.then_some(leader)
    }

    /// Advances the turn cursor to the next active, non-passed player.
    ///
    /// Probes at most one full circle. When no seat is eligible the cursor
    /// stays put and a consistency warning fires: correct orchestration
    /// resets the round before that state can be reached.
    pub fn next_player(&mut self) {
        let players = self.player_count();
        for step in 1..=players {
            let candidate = (self.current_player + step) % players;
            if self.active.contains(candidate) && !self.passed.contains(candidate) {
                self.current_player = candidate;
                return;
            }
        }

        log::warn!("turn advance found no eligible player; cursor unchanged");
        debug_assert!(false, "no eligible player to advance to");
    }
}
