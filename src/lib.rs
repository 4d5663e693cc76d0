//! # liars-poker
//!
//! A Liar's Poker rules engine for search and RL training.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every API takes `player_count` as context.
//!    Tables of 2 to 10 players, any hand length, decks of 1 to 10 digits.
//!
//! 2. **Explicit Contracts**: Games implement the `RulesEngine` trait and
//!    are registered by the embedding application, never by import side
//!    effects.
//!
//! 3. **Fail Loudly**: Illegal actions and bad configuration come back as
//!    `GameError`. Nothing is clamped and the state is never half-updated.
//!
//! ## Architecture
//!
//! - **Explicit Chance**: Dealing is a sequence of chance nodes that report
//!   their distribution. Drivers sample them with a seeded `GameRng`.
//!
//! - **Persistent Data Structures**: The action log is an `im::Vector`, so
//!   cloning a state for search is cheap.
//!
//! ## Modules
//!
//! - `core`: Players, actions, RNG, configuration, errors
//! - `rules`: `RulesEngine` / `Game` traits and the game registry
//! - `games`: The Liar's Poker implementation
//! - `nn`: Observation tensors and strings
//! - `rollout`: Playing games out with a policy

pub mod core;
pub mod games;
pub mod nn;
pub mod rollout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Actor, Bid, Digit, GameError, GameParams, GameRng, GameRngState,
    LiarsPokerConfig, PlayerId, PlayerMap,
};

pub use crate::rules::{Game, GameRegistry, GameResult, GameType, RulesEngine};

pub use crate::games::liars_poker::{
    register, BidCodec, Claim, LiarsPoker, LiarsPokerBuilder, LiarsPokerState, Outcome,
    LIARS_POKER_TYPE,
};

pub use crate::nn::{InformationStateObserver, ObservationType};

pub use crate::rollout::{play_game, play_many, ActionPolicy, Playout, UniformRandom};
