//! Game implementations.

pub mod liars_poker;
