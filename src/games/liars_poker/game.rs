//! Liar's Poker game definition and builder.

use tracing::debug;

use super::state::LiarsPokerState;
use crate::core::{Action, GameError, GameInfo, GameParams, LiarsPokerConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::nn::{InformationStateObserver, ObservationType};
use crate::rules::{Dynamics, Game, GameRegistry, GameType, Information, RulesEngine};

/// Static metadata under which the game registers.
pub const LIARS_POKER_TYPE: GameType = GameType {
    short_name: "liars_poker",
    long_name: "Liars Poker",
    dynamics: Dynamics::Sequential,
    information: Information::ImperfectInformation,
    min_num_players: MIN_PLAYERS,
    max_num_players: MAX_PLAYERS,
    explicit_chance: true,
    zero_sum: true,
    terminal_rewards: true,
    provides_information_state_string: true,
    provides_information_state_tensor: true,
    provides_observation_string: false,
    provides_observation_tensor: true,
};

/// A configured Liar's Poker table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiarsPoker {
    config: LiarsPokerConfig,
}

impl LiarsPoker {
    pub fn new(config: LiarsPokerConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build from named parameters over the defaults.
    pub fn from_params(params: &GameParams) -> Result<Self, GameError> {
        let config = LiarsPokerConfig::from_params(params)?;
        debug!(
            players = config.player_count,
            hand_length = config.hand_length,
            num_digits = config.num_digits,
            "created game from params"
        );
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &LiarsPokerConfig {
        &self.config
    }

    /// Observer for this table. `None` gives the default observation.
    #[must_use]
    pub fn make_observer(&self, observation_type: Option<ObservationType>) -> InformationStateObserver {
        InformationStateObserver::new(&self.config, observation_type.unwrap_or_default())
    }

    /// Rebuild a state by applying `actions` to a fresh one.
    ///
    /// Fails at the first action that is illegal where it lands.
    pub fn replay(&self, actions: &[Action]) -> Result<LiarsPokerState, GameError> {
        let mut state = self.new_initial_state();
        state.apply_actions(actions)?;
        Ok(state)
    }
}

impl Game for LiarsPoker {
    type State = LiarsPokerState;

    fn game_type(&self) -> &GameType {
        &LIARS_POKER_TYPE
    }

    fn info(&self) -> GameInfo {
        self.config.info()
    }

    fn new_initial_state(&self) -> LiarsPokerState {
        LiarsPokerState::fresh(&self.config)
    }
}

/// Builder for a [`LiarsPoker`] game.
///
/// ```
/// use liars_poker::games::liars_poker::LiarsPokerBuilder;
///
/// let game = LiarsPokerBuilder::new()
///     .player_count(4)
///     .hand_length(2)
///     .num_digits(10)
///     .build()
///     .unwrap();
/// assert_eq!(game.config().total_bids(), 80);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LiarsPokerBuilder {
    config: LiarsPokerConfig,
}

impl LiarsPokerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    #[must_use]
    pub fn hand_length(mut self, length: usize) -> Self {
        self.config.hand_length = length;
        self
    }

    #[must_use]
    pub fn num_digits(mut self, digits: usize) -> Self {
        self.config.num_digits = digits;
        self
    }

    pub fn build(self) -> Result<LiarsPoker, GameError> {
        LiarsPoker::new(self.config)
    }
}

/// Add Liar's Poker to an application-owned registry.
pub fn register(registry: &mut GameRegistry<LiarsPoker>) {
    registry.register(LIARS_POKER_TYPE, LiarsPoker::from_params);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Actor, Bid, Digit, PlayerId};

    #[test]
    fn test_builder_defaults() {
        let game = LiarsPokerBuilder::new().build().unwrap();
        assert_eq!(game, LiarsPoker::default());
        assert_eq!(game.config().player_count, 2);
        assert_eq!(game.config().hand_length, 3);
        assert_eq!(game.config().num_digits, 3);
    }

    #[test]
    fn test_builder_validates() {
        assert!(LiarsPokerBuilder::new().player_count(11).build().is_err());
        assert!(LiarsPokerBuilder::new().hand_length(0).build().is_err());
        assert!(LiarsPokerBuilder::new().num_digits(0).build().is_err());
    }

    #[test]
    fn test_game_type_metadata() {
        let game = LiarsPoker::default();
        let game_type = game.game_type();
        assert_eq!(game_type.short_name, "liars_poker");
        assert_eq!(game_type.long_name, "Liars Poker");
        assert_eq!((game_type.min_num_players, game_type.max_num_players), (2, 10));
        assert_eq!(game_type.dynamics, Dynamics::Sequential);
        assert_eq!(game_type.information, Information::ImperfectInformation);
        assert!(game_type.explicit_chance);
        assert!(game_type.zero_sum);
        assert!(game_type.terminal_rewards);
        assert!(game_type.provides_information_state_string);
        assert!(game_type.provides_information_state_tensor);
        assert!(!game_type.provides_observation_string);
        assert!(game_type.provides_observation_tensor);
    }

    #[test]
    fn test_info_uses_configured_player_count() {
        let game = LiarsPokerBuilder::new().player_count(5).build().unwrap();
        let info = game.info();
        assert_eq!(info.num_players, 5);
        assert_eq!(info.min_utility, -4.0);
        assert_eq!(info.max_game_length, 3 * 3 * 25);
    }

    #[test]
    fn test_new_initial_state_starts_dealing() {
        let game = LiarsPoker::default();
        let state = game.new_initial_state();
        assert_eq!(state.current_actor(), Actor::Chance);
        assert_eq!(state.player_count(), 2);
    }

    #[test]
    fn test_replay_matches_live_play() {
        let game = LiarsPokerBuilder::new().hand_length(1).build().unwrap();
        let mut live = game.new_initial_state();
        live.apply_actions(&[
            Action::Deal(Digit(2)),
            Action::Deal(Digit(3)),
            Action::Bid(Bid(1)),
            Action::Challenge,
        ])
        .unwrap();

        let replayed = game.replay(&live.history().actions()).unwrap();
        assert_eq!(replayed, live);
        assert_eq!(replayed.current_actor(), Actor::Player(PlayerId::new(0)));
    }

    #[test]
    fn test_replay_stops_at_illegal_action() {
        let game = LiarsPoker::default();
        let err = game.replay(&[Action::Challenge]).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction { actor: Actor::Chance, .. }));
    }

    #[test]
    fn test_make_observer_default_has_no_history() {
        let game = LiarsPoker::default();
        let observer = game.make_observer(None);
        assert_eq!(observer.observation_type(), ObservationType::default());
        assert!(observer.block("bid_history").is_none());

        let recall = game.make_observer(Some(ObservationType::information_state()));
        assert!(recall.block("bid_history").is_some());
    }
}
