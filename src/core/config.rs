//! Game configuration types.
//!
//! - `Digit` / `Deck`: the digit alphabet players draw from
//! - `LiarsPokerConfig`: table size, hand length, deck size
//! - `GameParams`: named integer overrides, as passed by an embedding host
//! - `GameInfo`: the bounds a hosting framework needs to size its buffers
//!
//! Configuration is immutable once a game is built. Everything derived from
//! it (bid space, tensor layout) is fixed for the lifetime of the game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;

/// Fewest players at a table.
pub const MIN_PLAYERS: usize = 2;

/// Most players at a table.
pub const MAX_PLAYERS: usize = 10;

/// Largest `total_bids * player_count` a table may have.
///
/// Each history matrix holds this many cells, and the bid space bounds the
/// legal-action list. Also keeps every bid identifier within `u32`.
pub const MAX_HISTORY_CELLS: usize = 1 << 24;

/// The fixed ordered deck the configured alphabet is a prefix of.
pub const FULL_DECK: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// Named integer parameters (`num_players`, `hand_length`, `num_digits`).
pub type GameParams = FxHashMap<String, i64>;

/// A digit symbol (0-9) drawn into a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digit(pub u8);

impl Digit {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered digit alphabet of a configured game.
///
/// A prefix of [`FULL_DECK`]: with 3 digits the deck is `[1, 2, 3]`,
/// with 10 it is `[1, 2, ..., 9, 0]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    digits: SmallVec<[Digit; 10]>,
}

impl Deck {
    /// The first `num_digits` symbols of the full deck.
    #[must_use]
    pub fn prefix(num_digits: usize) -> Self {
        Self {
            digits: FULL_DECK
                .iter()
                .take(num_digits)
                .map(|&d| Digit(d))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at a deck position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Digit> {
        self.digits.get(index).copied()
    }

    /// Deck position of a digit, if the digit is in this deck.
    #[must_use]
    pub fn index_of(&self, digit: Digit) -> Option<usize> {
        self.digits.iter().position(|&d| d == digit)
    }

    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.index_of(digit).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }
}

/// Liar's Poker table configuration.
///
/// ```
/// use liars_poker::core::LiarsPokerConfig;
///
/// let config = LiarsPokerConfig::default()
///     .with_player_count(3)
///     .with_hand_length(2);
/// config.validate().unwrap();
///
/// // 2 digits * 3 players per block, 3 digits in the deck
/// assert_eq!(config.block_size(), 6);
/// assert_eq!(config.total_bids(), 18);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiarsPokerConfig {
    /// Players at the table (2-10).
    pub player_count: usize,

    /// Digits dealt into each hand.
    pub hand_length: usize,

    /// Size of the digit alphabet (1-10).
    pub num_digits: usize,
}

impl Default for LiarsPokerConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            hand_length: 3,
            num_digits: 3,
        }
    }
}

impl LiarsPokerConfig {
    /// Create and validate a configuration.
    pub fn new(player_count: usize, hand_length: usize, num_digits: usize) -> Result<Self, GameError> {
        let config = Self {
            player_count,
            hand_length,
            num_digits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply named overrides on top of the defaults.
    ///
    /// Unknown names and negative values are rejected rather than ignored.
    pub fn from_params(params: &GameParams) -> Result<Self, GameError> {
        let mut config = Self::default();

        for (name, &value) in params {
            let as_usize = usize::try_from(value)
                .map_err(|_| GameError::config(name.as_str(), value, "must be non-negative"))?;
            match name.as_str() {
                "num_players" => config.player_count = as_usize,
                "hand_length" => config.hand_length = as_usize,
                "num_digits" => config.num_digits = as_usize,
                _ => return Err(GameError::config(name.as_str(), value, "unknown parameter")),
            }
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_hand_length(mut self, hand_length: usize) -> Self {
        self.hand_length = hand_length;
        self
    }

    #[must_use]
    pub fn with_num_digits(mut self, num_digits: usize) -> Self {
        self.num_digits = num_digits;
        self
    }

    /// Check every field against its supported range.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::config(
                "num_players",
                self.player_count as i64,
                "must be in 2..=10",
            ));
        }
        if self.hand_length == 0 {
            return Err(GameError::config("hand_length", 0, "must be positive"));
        }
        if !(1..=FULL_DECK.len()).contains(&self.num_digits) {
            return Err(GameError::config(
                "num_digits",
                self.num_digits as i64,
                "must be in 1..=10",
            ));
        }
        let cells = self
            .hand_length
            .checked_mul(self.player_count)
            .and_then(|block| block.checked_mul(self.num_digits))
            .and_then(|total_bids| total_bids.checked_mul(self.player_count))
            .filter(|&cells| cells <= MAX_HISTORY_CELLS);
        if cells.is_none() {
            return Err(GameError::config(
                "hand_length",
                i64::try_from(self.hand_length).unwrap_or(i64::MAX),
                "bid space too large",
            ));
        }
        Ok(())
    }

    /// Bids per digit: one per possible count, `hand_length * player_count`.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.hand_length * self.player_count
    }

    /// Size of the bid identifier space.
    #[must_use]
    pub fn total_bids(&self) -> usize {
        self.block_size() * self.num_digits
    }

    /// Chance draws needed to fill every hand.
    #[must_use]
    pub fn total_draws(&self) -> usize {
        self.hand_length * self.player_count
    }

    #[must_use]
    pub fn deck(&self) -> Deck {
        Deck::prefix(self.num_digits)
    }

    /// Framework-facing bounds for this configuration.
    #[must_use]
    pub fn info(&self) -> GameInfo {
        let n = self.player_count;
        GameInfo {
            num_distinct_actions: 2,
            max_chance_outcomes: self.hand_length * self.num_digits,
            num_players: n,
            min_utility: -((n - 1) as f64),
            max_utility: (n - 1) as f64,
            utility_sum: 0.0,
            max_game_length: self.hand_length * self.num_digits * n * n,
        }
    }
}

/// Bounds a hosting framework uses to size buffers and normalise values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Bid vs challenge; bids are parameterised at a higher level.
    pub num_distinct_actions: usize,

    pub max_chance_outcomes: usize,

    pub num_players: usize,

    /// Bidder caught lying: `-(n - 1)`.
    pub min_utility: f64,

    /// Bidder vindicated: `n - 1`.
    pub max_utility: f64,

    pub utility_sum: f64,

    /// Rounds (`hand_length * num_digits * n`) times moves per round (at most `n`).
    pub max_game_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LiarsPokerConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hand_length, 3);
        assert_eq!(config.num_digits, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_bids(), 18);
    }

    #[test]
    fn test_deck_prefix() {
        let deck = Deck::prefix(3);
        assert_eq!(deck.iter().collect::<Vec<_>>(), vec![Digit(1), Digit(2), Digit(3)]);

        let full = Deck::prefix(10);
        assert_eq!(full.get(9), Some(Digit(0)));
        assert_eq!(full.index_of(Digit(0)), Some(9));
        assert!(!deck.contains(Digit(4)));
    }

    #[test]
    fn test_config_rejects_player_counts() {
        assert!(LiarsPokerConfig::new(1, 3, 3).is_err());
        assert!(LiarsPokerConfig::new(11, 3, 3).is_err());
        assert!(LiarsPokerConfig::new(10, 3, 3).is_ok());
    }

    #[test]
    fn test_config_rejects_empty_hand_and_deck() {
        let err = LiarsPokerConfig::new(2, 0, 3).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { ref field, .. } if field == "hand_length"));

        assert!(LiarsPokerConfig::new(2, 3, 0).is_err());
        assert!(LiarsPokerConfig::new(2, 3, 11).is_err());
    }

    #[test]
    fn test_config_rejects_oversized_bid_space() {
        let err = LiarsPokerConfig::new(10, 40_000_000, 10).unwrap_err();
        assert_eq!(
            err,
            GameError::config("hand_length", 40_000_000, "bid space too large")
        );

        // 10 players * 10 digits * 10 players per unit of hand length
        let largest = MAX_HISTORY_CELLS / 1000;
        let config = LiarsPokerConfig::new(10, largest, 10).unwrap();
        assert!(config.total_bids() * config.player_count <= MAX_HISTORY_CELLS);
        assert!(LiarsPokerConfig::new(10, largest + 1, 10).is_err());

        assert!(LiarsPokerConfig::new(2, usize::MAX, 10).is_err());
    }

    #[test]
    fn test_from_params() {
        let mut params = GameParams::default();
        params.insert("num_players".to_string(), 4);
        params.insert("num_digits".to_string(), 10);

        let config = LiarsPokerConfig::from_params(&params).unwrap();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.hand_length, 3);
        assert_eq!(config.num_digits, 10);
    }

    #[test]
    fn test_from_params_rejects_unknown_and_negative() {
        let mut params = GameParams::default();
        params.insert("num_jokers".to_string(), 1);
        assert!(LiarsPokerConfig::from_params(&params).is_err());

        let mut params = GameParams::default();
        params.insert("hand_length".to_string(), -2);
        let err = LiarsPokerConfig::from_params(&params).unwrap_err();
        assert_eq!(
            err,
            GameError::config("hand_length", -2, "must be non-negative")
        );
    }

    #[test]
    fn test_game_info() {
        let info = LiarsPokerConfig::new(3, 2, 4).unwrap().info();
        assert_eq!(info.num_distinct_actions, 2);
        assert_eq!(info.max_chance_outcomes, 8);
        assert_eq!(info.num_players, 3);
        assert_eq!(info.min_utility, -2.0);
        assert_eq!(info.max_utility, 2.0);
        assert_eq!(info.utility_sum, 0.0);
        assert_eq!(info.max_game_length, 2 * 4 * 9);
    }

    #[test]
    fn test_config_serialization() {
        let config = LiarsPokerConfig::new(5, 2, 6).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LiarsPokerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
