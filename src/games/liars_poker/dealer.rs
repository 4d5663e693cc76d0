//! Chance logic for filling hands.
//!
//! Hands are dealt seat by seat: player 0 receives `hand_length` digits,
//! then player 1, and so on. Each draw is uniform over the deck with
//! replacement, so duplicates within and across hands are allowed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Deck, Digit, LiarsPokerConfig, PlayerId, PlayerMap};

/// Digits held by one player, in draw order.
pub type Hand = SmallVec<[Digit; 4]>;

/// Produces the draws that fill every hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandDealer {
    deck: Deck,
    hand_length: usize,
    player_count: usize,
}

impl HandDealer {
    #[must_use]
    pub fn new(config: &LiarsPokerConfig) -> Self {
        Self {
            deck: config.deck(),
            hand_length: config.hand_length,
            player_count: config.player_count,
        }
    }

    /// Every deck digit with probability `1 / num_digits`.
    #[must_use]
    pub fn chance_outcomes(&self) -> Vec<(Digit, f64)> {
        let probability = 1.0 / self.deck.len() as f64;
        self.deck.iter().map(|digit| (digit, probability)).collect()
    }

    /// First seat whose hand is still short, `None` once dealing is over.
    #[must_use]
    pub fn seat_to_deal(&self, hands: &PlayerMap<Hand>) -> Option<PlayerId> {
        hands.position(|hand| hand.len() < self.hand_length)
    }

    /// Whether `digit` is a valid draw.
    #[must_use]
    pub fn is_outcome(&self, digit: Digit) -> bool {
        self.deck.contains(digit)
    }

    /// Chance actions needed before bidding starts.
    #[must_use]
    pub fn total_draws(&self) -> usize {
        self.hand_length * self.player_count
    }
}
