//! Error type shared by the engine.
//!
//! Every failure is a caller-contract violation or a misconfiguration.
//! Nothing is retried and nothing is clamped: errors surface immediately.

use thiserror::Error;

use super::action::Action;
use super::player::Actor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A configuration value is outside its supported range.
    #[error("invalid configuration: {field}={value} ({reason})")]
    InvalidConfiguration {
        field: String,
        value: i64,
        reason: &'static str,
    },

    /// A bid identifier outside `[0, total_bids)`.
    #[error("bid {bid} outside bid space of {total_bids}")]
    InvalidBid { bid: u32, total_bids: u32 },

    /// A `(count, digit index)` pair with no bid identifier.
    #[error("no bid encodes count={count} digit_index={digit_index}")]
    InvalidClaim { count: u32, digit_index: usize },

    /// An action outside the legal set of the current actor.
    #[error("illegal action {action} for {actor}")]
    IllegalAction { action: Action, actor: Actor },

    /// A driver reached a non-terminal decision point with nothing to play.
    #[error("no legal actions for {0}")]
    NoLegalActions(Actor),

    /// No factory registered under this name.
    #[error("unknown game: {0}")]
    UnknownGame(String),
}

impl GameError {
    pub(crate) fn config(field: impl Into<String>, value: i64, reason: &'static str) -> Self {
        GameError::InvalidConfiguration {
            field: field.into(),
            value,
            reason,
        }
    }
}
