//! The driver loop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::ActionPolicy;
use crate::core::{Actor, GameError, GameRng, GameRngState, PlayerMap};
use crate::rules::{Game, GameResult, RulesEngine};

/// One finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playout<A> {
    /// Generator position before the first draw.
    pub rng_state: GameRngState,

    /// Every applied action, chance draws included.
    pub actions: Vec<A>,

    pub returns: PlayerMap<f64>,

    pub result: Option<GameResult>,
}

impl<A> Playout<A> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Play `state` to the end.
///
/// Chance outcomes are drawn by probability, decisions come from `policy`.
/// The state is left terminal.
pub fn play_game<S, P>(state: &mut S, policy: &P, rng: &mut GameRng) -> Result<Playout<S::Action>, GameError>
where
    S: RulesEngine,
    P: ActionPolicy<S>,
{
    let rng_state = rng.state();
    let mut actions = Vec::new();
    debug!(players = state.player_count(), seed = rng_state.seed, "playout started");

    loop {
        let actor = state.current_actor();
        let action = match actor {
            Actor::Terminal => break,
            Actor::Chance => {
                let outcomes = state.chance_outcomes();
                let weights: Vec<f64> = outcomes.iter().map(|&(_, p)| p).collect();
                rng.choose_weighted(&weights)
                    .map(|i| outcomes[i].0)
                    .ok_or(GameError::NoLegalActions(actor))?
            }
            Actor::Player(player) => {
                let legal = state.legal_actions(player);
                policy
                    .choose(state, player, &legal, rng)
                    .ok_or(GameError::NoLegalActions(actor))?
            }
        };
        state.apply_action(action)?;
        actions.push(action);
    }

    let returns = state.returns();
    let result = state.result();
    debug!(moves = actions.len(), ?result, "playout finished");

    Ok(Playout {
        rng_state,
        actions,
        returns,
        result,
    })
}

/// Play `count` fresh games, each on its own fork of a generator seeded with `seed`.
pub fn play_many<G, P>(
    game: &G,
    policy: &P,
    seed: u64,
    count: usize,
) -> Result<Vec<Playout<<G::State as RulesEngine>::Action>>, GameError>
where
    G: Game,
    P: ActionPolicy<G::State>,
{
    let mut rng = GameRng::new(seed);
    (0..count)
        .map(|_| {
            let mut fork = rng.fork();
            let mut state = game.new_initial_state();
            play_game(&mut state, policy, &mut fork)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, LiarsPokerConfig};
    use crate::games::liars_poker::{LiarsPoker, LiarsPokerBuilder};
    use crate::rollout::{FirstLegal, UniformRandom};

    #[test]
    fn test_play_game_reaches_terminal() {
        let game = LiarsPoker::default();
        let mut state = game.new_initial_state();
        let mut rng = GameRng::new(42);

        let playout = play_game(&mut state, &UniformRandom, &mut rng).unwrap();

        assert!(state.is_terminal());
        assert!(playout.result.is_some());
        assert_eq!(playout.returns, state.returns());
        assert!(playout.len() <= 6 + game.info().max_game_length);
    }

    #[test]
    fn test_first_six_actions_are_deals() {
        let game = LiarsPoker::default();
        let mut state = game.new_initial_state();
        let playout = play_game(&mut state, &FirstLegal, &mut GameRng::new(1)).unwrap();

        assert!(playout.actions[..6].iter().all(|a| matches!(a, Action::Deal(_))));
        assert!(!matches!(playout.actions[6], Action::Deal(_)));
    }

    #[test]
    fn test_first_legal_walks_the_whole_bid_ladder() {
        let config = LiarsPokerConfig::new(2, 1, 2).unwrap();
        let game = LiarsPoker::new(config).unwrap();
        let mut state = game.new_initial_state();
        let playout = play_game(&mut state, &FirstLegal, &mut GameRng::new(3)).unwrap();

        // 2 deals, 4 bids, then challenges until the last bid resolves
        let bids = playout.actions.iter().filter(|a| a.bid().is_some()).count();
        assert_eq!(bids, 4);
        assert_eq!(playout.actions.last(), Some(&Action::Challenge));
    }

    #[test]
    fn test_playout_replays_from_rng_state() {
        let game = LiarsPokerBuilder::new().player_count(3).build().unwrap();
        let mut rng = GameRng::new(7);
        let mut state = game.new_initial_state();
        let first = play_game(&mut state, &UniformRandom, &mut rng).unwrap();

        let mut again = GameRng::from_state(&first.rng_state);
        let mut state = game.new_initial_state();
        let second = play_game(&mut state, &UniformRandom, &mut again).unwrap();

        assert_eq!(first, second);
        assert_eq!(game.replay(&first.actions).unwrap(), state);
    }

    #[test]
    fn test_play_many_is_deterministic() {
        let game = LiarsPoker::default();
        let a = play_many(&game, &UniformRandom, 11, 5).unwrap();
        let b = play_many(&game, &UniformRandom, 11, 5).unwrap();

        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
        assert_ne!(a[0].rng_state, a[1].rng_state);
    }
}
