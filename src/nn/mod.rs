//! Tensor encoding of what a player may observe.
//!
//! - `EncodedState` / `StateEncoder`: framework-neutral tensor output
//! - `InformationStateObserver`: the Liar's Poker observer, configured by
//!   an `ObservationType`, exposing its tensor block by block
//!
//! ## Usage
//!
//! ```rust,ignore
//! let game = LiarsPoker::default();
//! let mut observer = game.make_observer(Some(ObservationType::information_state()));
//!
//! observer.set_from(&state, player);
//! let input = observer.tensor();
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{InformationStateObserver, ObservationType, PrivateInfo, TensorBlock};
pub use traits::{EncodedState, StateEncoder};
