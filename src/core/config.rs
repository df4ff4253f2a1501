//! Game configuration.
//!
//! The defaults reproduce the classic 4x4 board: 8 pairs drawn from a pool
//! of 15 images, a one second pause before a pair resolves and a half second
//! pause before the completion notice.
//!
//! ```
//! use memory_tiles::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_pairs_needed(4)
//!     .with_resolution_delay_ms(250);
//!
//! assert_eq!(config.grid_size(), 8);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::board::{ImageKey, MAX_TILES};

/// Number of distinct images available to pick from.
pub const DEFAULT_IMAGE_POOL_SIZE: u16 = 15;

/// Pairs on a board. Two tiles per pair gives the 16-tile grid.
pub const DEFAULT_PAIRS_NEEDED: u16 = 8;

/// Tiles on a default board.
pub const DEFAULT_GRID_SIZE: usize = 2 * DEFAULT_PAIRS_NEEDED as usize;

/// Pause between revealing the second tile and resolving the pair.
pub const DEFAULT_RESOLUTION_DELAY_MS: u64 = 1000;

/// Pause between the final match and the completion notice.
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 500;

/// Complete engine configuration.
///
/// Supplied at engine construction. Every engine instance owns its own copy,
/// so independent games may run side by side with different settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Size of the image pool `1..=image_pool_size`.
    pub image_pool_size: u16,

    /// Pairs placed on each board.
    pub pairs_needed: u16,

    /// Delay before a selected pair is compared.
    pub resolution_delay_ms: u64,

    /// Delay before the completion notice is announced.
    pub completion_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            image_pool_size: DEFAULT_IMAGE_POOL_SIZE,
            pairs_needed: DEFAULT_PAIRS_NEEDED,
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image pool size.
    #[must_use]
    pub fn with_image_pool_size(mut self, size: u16) -> Self {
        self.image_pool_size = size;
        self
    }

    /// Set the number of pairs per board.
    #[must_use]
    pub fn with_pairs_needed(mut self, pairs: u16) -> Self {
        self.pairs_needed = pairs;
        self
    }

    /// Set the pair resolution delay.
    #[must_use]
    pub fn with_resolution_delay_ms(mut self, delay: u64) -> Self {
        self.resolution_delay_ms = delay;
        self
    }

    /// Set the completion notice delay.
    #[must_use]
    pub fn with_completion_delay_ms(mut self, delay: u64) -> Self {
        self.completion_delay_ms = delay;
        self
    }

    /// Number of tiles on a board.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        2 * self.pairs_needed as usize
    }

    /// Check that the pool can supply the requested pairs and that every
    /// tile of the grid gets its own `TileId`.
    pub fn validate(&self) -> Result<()> {
        if self.pairs_needed == 0
            || self.image_pool_size < self.pairs_needed
            || self.grid_size() > MAX_TILES
        {
            return Err(GameError::Config {
                image_pool_size: self.image_pool_size,
                pairs_needed: self.pairs_needed,
            });
        }
        Ok(())
    }

    /// Every key in the image pool, in order.
    pub fn image_pool(&self) -> impl Iterator<Item = ImageKey> {
        (1..=self.image_pool_size).map(ImageKey::new)
    }

    /// Asset names for the whole pool, for hosts that preload images.
    #[must_use]
    pub fn asset_names(&self) -> Vec<String> {
        self.image_pool().map(ImageKey::asset_name).collect()
    }
}
