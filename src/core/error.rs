//! Engine error types.
//!
//! Only configuration and invariant failures are errors. Rejected player
//! input is reported through [`crate::engine::Selection`] instead.

use thiserror::Error;

use crate::board::LayoutError;

/// Errors raised by board generation and session setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The image pool cannot supply enough distinct pairs, or the grid
    /// would outgrow the tile id space.
    #[error("image pool of {image_pool_size} cannot supply {pairs_needed} pairs")]
    Config {
        image_pool_size: u16,
        pairs_needed: u16,
    },

    /// Board generation kept producing layouts that failed validation.
    #[error("board generation failed validation {attempts} times in a row")]
    InvariantViolation { attempts: usize },

    /// An explicitly supplied layout is not a valid board.
    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, GameError>;
