//! Player identification, turn ownership, and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index at the table, 0-based.
//!
//! ## Actor
//!
//! Who moves next: a seated player, the chance dealer, or nobody once the
//! game is over.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, wrapping around the table.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use liars_poker::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The entity expected to act next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// A seated player must choose an action.
    Player(PlayerId),
    /// The dealer draws a chance outcome.
    Chance,
    /// The game is over; nobody acts.
    Terminal,
}

impl Actor {
    /// The seated player, if this actor is one.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Actor::Player(p) => Some(p),
            Actor::Chance | Actor::Terminal => None,
        }
    }

    #[must_use]
    pub const fn is_chance(self) -> bool {
        matches!(self, Actor::Chance)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Actor::Terminal)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Player(p) => write!(f, "{p}"),
            Actor::Chance => write!(f, "Chance"),
            Actor::Terminal => write!(f, "Terminal"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use liars_poker::core::{PlayerId, PlayerMap};
///
/// let mut chips: PlayerMap<i32> = PlayerMap::with_value(3, 0);
/// chips[PlayerId::new(1)] = 5;
/// assert_eq!(chips[PlayerId::new(1)], 5);
/// assert_eq!(chips.values().sum::<i32>(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Panics on an empty table; table sizes are validated by the game
    /// configuration before any map is built.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Seat-ordered view of the values.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Find the first seat whose value matches a predicate.
    pub fn position(&self, predicate: impl Fn(&T) -> bool) -> Option<PlayerId> {
        self.data
            .iter()
            .position(predicate)
            .map(|i| PlayerId(i as u8))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
