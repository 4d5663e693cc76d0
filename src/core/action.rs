//! Action representation.
//!
//! Three kinds of action move a game forward:
//! - `Deal(digit)`: the chance dealer draws a digit into the hand being filled
//! - `Bid(bid)`: a player raises the standing bid
//! - `Challenge`: a player votes that the standing bid is false
//!
//! Bids are opaque identifiers here; `BidCodec` gives them meaning.

use serde::{Deserialize, Serialize};

use super::config::Digit;
use super::player::Actor;

/// Bid identifier in `[0, total_bids)`. Larger identifiers are stronger bids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid(pub u32);

impl Bid {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bid({})", self.0)
    }
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Chance outcome: a digit drawn from the deck.
    Deal(Digit),
    /// Raise to this bid.
    Bid(Bid),
    /// Challenge the standing bid.
    Challenge,
}

impl Action {
    /// Dense index for policy vectors: bids keep their identifier and
    /// `Challenge` maps to `total_bids`. Chance draws have no index.
    #[must_use]
    pub fn index(self, total_bids: usize) -> Option<usize> {
        match self {
            Action::Bid(bid) => Some(bid.index()),
            Action::Challenge => Some(total_bids),
            Action::Deal(_) => None,
        }
    }

    /// Inverse of [`Action::index`] for player actions.
    #[must_use]
    pub fn from_index(index: usize, total_bids: usize) -> Option<Self> {
        match index {
            i if i < total_bids => Some(Action::Bid(Bid(i as u32))),
            i if i == total_bids => Some(Action::Challenge),
            _ => None,
        }
    }

    #[must_use]
    pub const fn bid(self) -> Option<Bid> {
        match self {
            Action::Bid(bid) => Some(bid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Deal(digit) => write!(f, "Deal({digit})"),
            Action::Bid(bid) => write!(f, "{bid}"),
            Action::Challenge => write!(f, "Challenge"),
        }
    }
}

/// An applied action with the actor who took it.
///
/// Used for:
/// - Replaying a game from its log
/// - Debugging and training data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted (a player or the chance dealer).
    pub actor: Actor,

    /// The action taken.
    pub action: Action,

    /// Position in the game's action log.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(actor: Actor, action: Action, sequence: u32) -> Self {
        Self {
            actor,
            action,
            sequence,
        }
    }
}
