//! Rollout driver tests over many random games.

mod common;

use common::{game, init_logging};
use liars_poker::core::{Action, GameRng, PlayerId};
use liars_poker::games::liars_poker::LiarsPokerState;
use liars_poker::nn::ObservationType;
use liars_poker::rollout::{play_game, play_many, ActionPolicy, FirstLegal, UniformRandom};
use liars_poker::rules::{Game, RulesEngine};

/// Challenges whenever it can.
struct AlwaysChallenge;

impl ActionPolicy<LiarsPokerState> for AlwaysChallenge {
    fn choose(
        &self,
        _state: &LiarsPokerState,
        _player: PlayerId,
        legal: &[Action],
        _rng: &mut GameRng,
    ) -> Option<Action> {
        legal
            .iter()
            .copied()
            .find(|&a| a == Action::Challenge)
            .or_else(|| legal.first().copied())
    }
}

#[test]
fn test_random_games_finish_within_bounds() {
    init_logging();
    for players in [2, 3, 6, 10] {
        let game = game(players, 2, 6);
        let max_len = game.info().max_game_length + game.config().total_draws();

        for playout in play_many(&game, &UniformRandom, 2024, 20).unwrap() {
            assert!(playout.result.is_some());
            assert!(playout.len() <= max_len);
            assert_eq!(playout.returns.values().sum::<f64>(), 0.0);
        }
    }
}

#[test]
fn test_always_challenge_resolves_opening_bid() {
    init_logging();
    let game = game(3, 2, 3);
    let mut state = game.new_initial_state();
    let playout = play_game(&mut state, &AlwaysChallenge, &mut GameRng::new(9)).unwrap();

    // 6 deals, the opening bid, then one challenge per player
    assert_eq!(playout.len(), 6 + 1 + 3);
    assert_eq!(state.current_bid().map(|b| b.id()), Some(0));
    assert!(state.is_terminal());
}

#[test]
fn test_deterministic_policy_depends_only_on_deal() {
    init_logging();
    let game = game(2, 3, 3);
    let first = play_many(&game, &FirstLegal, 77, 3).unwrap();
    let second = play_many(&game, &FirstLegal, 77, 3).unwrap();
    assert_eq!(first, second);

    let bids = first[0].actions.iter().filter(|a| a.bid().is_some()).count();
    assert_eq!(bids, game.config().total_bids());
}

#[test]
fn test_observer_follows_a_random_game() {
    init_logging();
    let game = game(4, 2, 5);
    let mut observer = game.make_observer(Some(ObservationType::information_state()));
    let mut rng = GameRng::new(31);
    let mut driver = game.new_initial_state();
    let playout = play_game(&mut driver, &UniformRandom, &mut rng).unwrap();

    let mut state = game.new_initial_state();
    let size = observer.size();
    for action in playout.actions {
        state.apply_action(action).unwrap();
        for player in PlayerId::all(4) {
            observer.set_from(&state, player);
            assert_eq!(observer.tensor().len(), size);
            assert_eq!(observer.block_values("player").unwrap()[player.index()], 1.0);
        }
    }
    assert_eq!(state, driver);
}
