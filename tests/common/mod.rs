//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use liars_poker::core::{Action, Digit, LiarsPokerConfig};
use liars_poker::games::liars_poker::{LiarsPoker, LiarsPokerState};
use liars_poker::rules::{Game, RulesEngine};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn game(players: usize, hand_length: usize, num_digits: usize) -> LiarsPoker {
    LiarsPoker::new(LiarsPokerConfig::new(players, hand_length, num_digits).unwrap()).unwrap()
}

/// A state with every hand dealt as given, seat by seat.
pub fn dealt(game: &LiarsPoker, hands: &[&[u8]]) -> LiarsPokerState {
    let mut state = game.new_initial_state();
    for hand in hands {
        for &digit in *hand {
            state.apply_action(Action::Deal(Digit(digit))).unwrap();
        }
    }
    state
}
