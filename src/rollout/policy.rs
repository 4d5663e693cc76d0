//! Action selection for rollouts.

use crate::core::{GameRng, PlayerId};
use crate::rules::RulesEngine;

/// Chooses a player action from the legal set.
///
/// Returns `None` only when `legal` is empty.
pub trait ActionPolicy<S: RulesEngine> {
    fn choose(
        &self,
        state: &S,
        player: PlayerId,
        legal: &[S::Action],
        rng: &mut GameRng,
    ) -> Option<S::Action>;
}

/// Uniform over the legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl<S: RulesEngine> ActionPolicy<S> for UniformRandom {
    fn choose(
        &self,
        _state: &S,
        _player: PlayerId,
        legal: &[S::Action],
        rng: &mut GameRng,
    ) -> Option<S::Action> {
        rng.choose(legal).copied()
    }
}

/// Always the first legal action. Deterministic given the deal.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl<S: RulesEngine> ActionPolicy<S> for FirstLegal {
    fn choose(
        &self,
        _state: &S,
        _player: PlayerId,
        legal: &[S::Action],
        _rng: &mut GameRng,
    ) -> Option<S::Action> {
        legal.first().copied()
    }
}
