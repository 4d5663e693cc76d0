//! Playing games out.
//!
//! The driver loop asks the state who acts next. Chance nodes are sampled
//! from their reported distribution with a seeded `GameRng`; decision
//! points are handed to an `ActionPolicy`. Every playout records the
//! generator position it started from, so it can be reproduced exactly.

mod policy;
mod runner;

pub use policy::{ActionPolicy, FirstLegal, UniformRandom};
pub use runner::{play_game, play_many, Playout};
