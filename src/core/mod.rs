//! Core engine types: configuration, errors, RNG.
//!
//! Everything here is independent of the game rules. The engine takes a
//! `GameConfig` and a `RandomSource` at construction and never reads global
//! state.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    GameConfig, DEFAULT_COMPLETION_DELAY_MS, DEFAULT_GRID_SIZE, DEFAULT_IMAGE_POOL_SIZE,
    DEFAULT_PAIRS_NEEDED, DEFAULT_RESOLUTION_DELAY_MS,
};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState, RandomSource};
