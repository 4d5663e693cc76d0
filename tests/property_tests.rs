//! Property-based tests for bid encoding and reachable-state invariants.

mod common;

use common::init_logging;
use liars_poker::core::{Action, GameRng, LiarsPokerConfig, PlayerId};
use liars_poker::games::liars_poker::{BidCodec, LiarsPoker};
use liars_poker::nn::ObservationType;
use liars_poker::rules::{Game, RulesEngine};
use proptest::prelude::*;

/// Valid table configurations, kept small enough to play out quickly.
fn config() -> impl Strategy<Value = LiarsPokerConfig> {
    (2usize..=6, 1usize..=3, 1usize..=10).prop_map(|(players, hand, digits)| {
        LiarsPokerConfig::new(players, hand, digits).expect("strategy yields valid configs")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: decode then encode returns the original bid.
    #[test]
    fn prop_bid_codec_bijection(config in config(), raw in any::<u32>()) {
        let codec = BidCodec::new(&config);
        let bid = liars_poker::core::Bid(raw % codec.total_bids());

        let claim = codec.decode(bid).unwrap();
        prop_assert!((1..=codec.block_size()).contains(&claim.count));
        prop_assert_eq!(codec.encode(claim.count, claim.digit_index), Ok(bid));
    }

    /// Property: out-of-range identifiers never decode.
    #[test]
    fn prop_bid_codec_rejects_out_of_range(config in config(), extra in 0u32..1000) {
        let codec = BidCodec::new(&config);
        let bid = liars_poker::core::Bid(codec.total_bids() + extra);
        prop_assert!(codec.decode(bid).is_err());
    }

    /// Property: along any random game, legal bids are strictly above the
    /// standing bid, returns stay zero until the end and sum to zero after,
    /// and the observation size never changes.
    #[test]
    fn prop_reachable_states_hold_invariants(config in config(), seed in any::<u64>()) {
        init_logging();
        let game = LiarsPoker::new(config).unwrap();
        let mut observer = game.make_observer(Some(ObservationType::information_state()));
        let size = observer.size();
        let mut rng = GameRng::new(seed);
        let mut state = game.new_initial_state();
        let mut draws = 0;

        while !state.is_terminal() {
            prop_assert!(state.returns().values().all(|&r| r == 0.0));

            let actions = state.current_legal_actions();
            prop_assert!(!actions.is_empty());

            if state.is_chance_node() {
                draws += 1;
            } else if let Some(current) = state.current_bid() {
                for bid in actions.iter().filter_map(|a| a.bid()) {
                    prop_assert!(bid > current);
                }
            }

            let action = *rng.choose(&actions).unwrap();
            state.apply_action(action).unwrap();

            observer.set_from(&state, PlayerId::new(0));
            prop_assert_eq!(observer.tensor().len(), size);
        }

        prop_assert_eq!(draws, config.total_draws());
        prop_assert_eq!(state.returns().values().sum::<f64>(), 0.0);
        prop_assert!(state.history().len() <= draws + config.info().max_game_length);
    }

    /// Property: the private hand block is zero until the viewer's hand is
    /// complete, then equals the hand in draw order.
    #[test]
    fn prop_private_hand_visibility(config in config(), seed in any::<u64>()) {
        let game = LiarsPoker::new(config).unwrap();
        let mut observer = game.make_observer(None);
        let mut rng = GameRng::new(seed);
        let mut state = game.new_initial_state();

        while state.is_chance_node() {
            let outcomes = state.chance_outcomes();
            let (action, _) = *rng.choose(&outcomes).unwrap();
            state.apply_action(action).unwrap();

            for player in PlayerId::all(config.player_count) {
                observer.set_from(&state, player);
                let block = observer.block_values("private_hand").unwrap();
                if state.is_hand_complete(player) {
                    let hand: Vec<f32> = state.hand(player).iter().map(|d| f32::from(d.value())).collect();
                    prop_assert_eq!(block, hand.as_slice());
                } else {
                    prop_assert!(block.iter().all(|&v| v == 0.0));
                }
            }
        }
        prop_assert!(matches!(state.current_legal_actions().first(), Some(Action::Bid(_))));
    }
}
