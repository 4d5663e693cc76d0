//! The contract between a game and whatever drives it.
//!
//! A driver (search, training loop, UI) only ever talks to a state through
//! `RulesEngine`:
//!
//! ```text
//! loop {
//!     match state.current_actor() {
//!         Actor::Chance => sample from state.chance_outcomes(),
//!         Actor::Player(p) => pick from state.legal_actions(p),
//!         Actor::Terminal => break,
//!     }
//!     state.apply_action(action)?;
//! }
//! state.returns()
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Actor, GameError, GameInfo, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Everyone listed shares the win.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// How players take turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dynamics {
    /// One actor at a time.
    Sequential,
    /// Every player commits an action each step.
    Simultaneous,
}

/// What players can see of the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Information {
    PerfectInformation,
    /// Some of the state (hands, deck order) is hidden from some players.
    ImperfectInformation,
}

/// Static description of a game family, used for registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameType {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub dynamics: Dynamics,
    pub information: Information,
    pub min_num_players: usize,
    pub max_num_players: usize,
    /// Chance outcomes are listed explicitly with their probabilities.
    pub explicit_chance: bool,
    pub zero_sum: bool,
    /// Rewards only arrive at terminal states.
    pub terminal_rewards: bool,
    pub provides_information_state_string: bool,
    pub provides_information_state_tensor: bool,
    pub provides_observation_string: bool,
    pub provides_observation_tensor: bool,
}

/// Turn-based state machine.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty unless `player` is the current actor
/// - `apply_action`: deterministic; rejects anything outside the legal set
///   and leaves the state untouched when it does
/// - `returns`: all zeros until terminal
pub trait RulesEngine {
    type Action: Copy + PartialEq + std::fmt::Debug;

    fn player_count(&self) -> usize;

    /// Who acts next: a player, the chance dealer, or nobody.
    fn current_actor(&self) -> Actor;

    /// Legal actions for a player, sorted ascending.
    fn legal_actions(&self, player: PlayerId) -> Vec<Self::Action>;

    /// Outcome distribution at a chance node; empty elsewhere.
    fn chance_outcomes(&self) -> Vec<(Self::Action, f64)>;

    /// Advance the state by one action of the current actor.
    fn apply_action(&mut self, action: Self::Action) -> Result<(), GameError>;

    fn is_terminal(&self) -> bool;

    /// Per-player total reward so far.
    fn returns(&self) -> PlayerMap<f64>;

    /// Result once terminal, `None` while the game continues.
    fn result(&self) -> Option<GameResult>;

    fn action_to_string(&self, actor: Actor, action: Self::Action) -> String;

    // === Convenience Methods ===

    fn is_chance_node(&self) -> bool {
        self.current_actor().is_chance()
    }

    /// Actions available to whoever acts now.
    fn current_legal_actions(&self) -> Vec<Self::Action> {
        match self.current_actor() {
            Actor::Player(player) => self.legal_actions(player),
            Actor::Chance => self
                .chance_outcomes()
                .into_iter()
                .map(|(action, _)| action)
                .collect(),
            Actor::Terminal => Vec::new(),
        }
    }

    /// Apply a sequence of actions, stopping at the first rejected one.
    fn apply_actions(&mut self, actions: &[Self::Action]) -> Result<(), GameError> {
        for &action in actions {
            self.apply_action(action)?;
        }
        Ok(())
    }
}

/// A configured game that can start new states.
pub trait Game {
    type State: RulesEngine;

    fn game_type(&self) -> &GameType;

    fn info(&self) -> GameInfo;

    fn new_initial_state(&self) -> Self::State;
}
