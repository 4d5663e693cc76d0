//! Game registry for name-based construction.
//!
//! Nothing registers itself. The embedding application builds a registry at
//! startup and calls each game's `register` function explicitly.
//!
//! ```
//! use liars_poker::core::GameParams;
//! use liars_poker::games::liars_poker::{register, LiarsPoker};
//! use liars_poker::rules::GameRegistry;
//!
//! let mut registry: GameRegistry<LiarsPoker> = GameRegistry::new();
//! register(&mut registry);
//!
//! let game = registry.create("liars_poker", &GameParams::default()).unwrap();
//! assert_eq!(game.config().player_count, 2);
//! ```

use rustc_hash::FxHashMap;

use super::engine::{Game, GameType};
use crate::core::{GameError, GameParams};

/// Builds a configured game from named parameters.
pub type GameFactory<G> = fn(&GameParams) -> Result<G, GameError>;

/// Registry of game factories keyed by short name.
#[derive(Clone, Debug)]
pub struct GameRegistry<G: Game> {
    entries: FxHashMap<&'static str, (GameType, GameFactory<G>)>,
}

impl<G: Game> Default for GameRegistry<G> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<G: Game> GameRegistry<G> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `game_type.short_name`.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, game_type: GameType, factory: GameFactory<G>) {
        if self.entries.contains_key(game_type.short_name) {
            panic!("Game {:?} already registered", game_type.short_name);
        }
        tracing::debug!(name = game_type.short_name, "registered game");
        self.entries.insert(game_type.short_name, (game_type, factory));
    }

    /// Build a game by name.
    pub fn create(&self, name: &str, params: &GameParams) -> Result<G, GameError> {
        let (_, factory) = self
            .entries
            .get(name)
            .ok_or_else(|| GameError::UnknownGame(name.to_string()))?;
        factory(params)
    }

    #[must_use]
    pub fn game_type(&self, name: &str) -> Option<&GameType> {
        self.entries.get(name).map(|(game_type, _)| game_type)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
