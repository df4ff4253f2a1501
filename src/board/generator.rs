//! Random board generation.
//!
//! 1. Shuffle the image pool and keep the first `pairs_needed` keys.
//! 2. Duplicate them and shuffle again for the final slot order.
//! 3. Validate, regenerating a bounded number of times.
//!
//! The algorithm is correct by construction, so a validation failure points
//! at a logic bug. Running out of attempts is reported as
//! [`GameError::InvariantViolation`] instead of looping forever.

use crate::core::{GameConfig, GameError, RandomSource, Result};

use super::layout::{validate_layout, Board};
use super::tile::ImageKey;

/// Generation attempts before giving up with `InvariantViolation`.
pub const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Unbiased in-place Fisher-Yates shuffle.
///
/// For `i` from the last index down to 1, swap `i` with a uniform `j` in
/// `0..=i`. Slices of length 0 or 1 are left untouched.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i);
        items.swap(i, j);
    }
}

/// Pick `pairs_needed` distinct keys from the pool, duplicate and shuffle.
///
/// Does not validate the result.
pub fn deal_layout<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<ImageKey> {
    let mut pool: Vec<ImageKey> = config.image_pool().collect();
    shuffle(&mut pool, rng);
    pool.truncate(config.pairs_needed as usize);
    log::debug!("selected images for this game: {:?}", pool);

    let mut layout = Vec::with_capacity(pool.len() * 2);
    layout.extend_from_slice(&pool);
    layout.extend_from_slice(&pool);
    shuffle(&mut layout, rng);
    layout
}

/// Generate a validated, face-down board.
///
/// Fails with [`GameError::Config`] if the pool cannot supply the pairs.
pub fn generate_board<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Board> {
    config.validate()?;
    generate_validated(config.pairs_needed, MAX_GENERATION_ATTEMPTS, || {
        deal_layout(config, &mut *rng)
    })
}

/// Run `deal` until it produces a valid layout or `attempts` run out.
pub(crate) fn generate_validated<F>(pairs_needed: u16, attempts: usize, mut deal: F) -> Result<Board>
where
    F: FnMut() -> Vec<ImageKey>,
{
    for attempt in 1..=attempts {
        let layout = deal();
        match validate_layout(&layout, pairs_needed) {
            Ok(()) => {
                log::trace!("board validation passed on attempt {}", attempt);
                return Ok(Board::from_validated(&layout));
            }
            Err(err) => {
                log::warn!("board validation failed on attempt {}: {}, regenerating", attempt, err);
            }
        }
    }

    log::error!("board generation failed validation {} times", attempts);
    Err(GameError::InvariantViolation { attempts })
}
