//! The framework contract games implement.
//!
//! - `RulesEngine`: the per-state turn machine (actor, legal actions,
//!   action application, returns)
//! - `Game`: a configured game that starts new states
//! - `GameRegistry`: explicit name-based construction
//!
//! Drivers call into these traits and never interpret game-specific
//! concepts directly.

pub mod engine;
pub mod registry;

pub use engine::{Dynamics, Game, GameResult, GameType, Information, RulesEngine};
pub use registry::{GameFactory, GameRegistry};
