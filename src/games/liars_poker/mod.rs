//! Liar's Poker.
//!
//! Every player is dealt a hand of digits. Players take turns raising a
//! claim about how many times some digit appears across *all* hands, or
//! challenging the standing claim. Once enough challenges land, the hands
//! are counted and the bidder either collects from or pays every opponent.
//!
//! Supports 2-10 players, any hand length and decks of 1-10 digits.

mod bid;
mod dealer;
mod game;
mod history;
mod state;

pub use bid::{BidCodec, Claim};
pub use dealer::{Hand, HandDealer};
pub use game::{register, LiarsPoker, LiarsPokerBuilder, LIARS_POKER_TYPE};
pub use history::HistoryLedger;
pub use state::{LiarsPokerState, Outcome, StandingBid};
