//! Bid encoding.
//!
//! The bid space is split into one contiguous block per deck digit, in deck
//! order. Within a block, offset `k` claims `k + 1` occurrences of that
//! block's digit. With 2 players holding 2 digits each from `[1, 2, 3]`
//! (block size 4):
//!
//! ```text
//! id:     0  1  2  3 | 4  5  6  7 | 8  9 10 11
//! claim: 1x1 ...  4x1 | 1x2 ... 4x2 | 1x3 ... 4x3
//! ```
//!
//! Any claim on a later digit outranks every claim on an earlier one, so a
//! larger identifier is always a stronger bid.

use serde::{Deserialize, Serialize};

use crate::core::{Bid, Deck, Digit, GameError, LiarsPokerConfig};

/// A decoded bid: "at least `count` of `digit` across all hands".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    /// Claimed occurrences, `1..=block_size`.
    pub count: u32,
    pub digit: Digit,
    /// Position of `digit` in the deck.
    pub digit_index: usize,
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.count, self.digit)
    }
}

/// Stateless bijection between bid identifiers and claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidCodec {
    block_size: u32,
    deck: Deck,
}

impl BidCodec {
    /// Codec for a validated configuration.
    #[must_use]
    pub fn new(config: &LiarsPokerConfig) -> Self {
        Self {
            block_size: config.block_size() as u32,
            deck: config.deck(),
        }
    }

    /// Bids per digit.
    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    #[must_use]
    pub fn total_bids(&self) -> u32 {
        self.block_size * self.deck.len() as u32
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Decode a bid identifier into its claim.
    pub fn decode(&self, bid: Bid) -> Result<Claim, GameError> {
        let total_bids = self.total_bids();
        if bid.id() >= total_bids {
            return Err(GameError::InvalidBid {
                bid: bid.id(),
                total_bids,
            });
        }

        let digit_index = (bid.id() / self.block_size) as usize;
        let digit = self
            .deck
            .get(digit_index)
            .ok_or(GameError::InvalidBid { bid: bid.id(), total_bids })?;

        Ok(Claim {
            count: bid.id() % self.block_size + 1,
            digit,
            digit_index,
        })
    }

    /// Encode `count` occurrences of the digit at `digit_index`.
    pub fn encode(&self, count: u32, digit_index: usize) -> Result<Bid, GameError> {
        if count == 0 || count > self.block_size || digit_index >= self.deck.len() {
            return Err(GameError::InvalidClaim { count, digit_index });
        }
        Ok(Bid(digit_index as u32 * self.block_size + count - 1))
    }

    /// Every bid strictly stronger than `current`; all bids when `None`.
    pub fn bids_above(&self, current: Option<Bid>) -> impl Iterator<Item = Bid> {
        let start = current.map_or(0, |bid| bid.id() + 1);
        (start..self.total_bids()).map(Bid)
    }
}
