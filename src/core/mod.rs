//! Core engine types: players, actions, RNG, configuration, errors.
//!
//! These are shared by the rules, the game state machine, the observer and
//! the rollout driver.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{Actor, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{Deck, Digit, GameInfo, GameParams, LiarsPokerConfig, FULL_DECK, MAX_HISTORY_CELLS, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord, Bid};
pub use error::GameError;
