//! # memory-tiles
//!
//! A tile-matching memory game engine: a grid of face-down tiles backed by
//! image pairs, two flips per turn, matches stay face up, the game ends when
//! every pair is found.
//!
//! ## Design Principles
//!
//! 1. **State machine, not widgets**: The engine owns all game state and
//!    notifies a presentation layer through events. It never renders.
//!
//! 2. **Host-clocked**: Pauses are deferred actions on a logical clock the
//!    host advances. Nothing sleeps, so the host stays responsive.
//!
//! 3. **Cancellable by construction**: Every deferred action carries the
//!    session token it was scheduled under and is dropped if the session has
//!    been replaced.
//!
//! 4. **Deterministic**: The random source is injected, so boards are
//!    reproducible from a seed and tests can script shuffles.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `board`: Tiles, boards, shuffle, generation and validation
//! - `session`: Round state, phases, session tokens
//! - `events`: Outbound events and listeners
//! - `schedule`: Deferred-action queue
//! - `engine`: The game engine

pub mod core;
pub mod board;
pub mod session;
pub mod events;
pub mod schedule;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, GameRngState, RandomSource, Result};

pub use crate::board::{Board, ImageKey, LayoutError, Tile, TileId, TileState};

pub use crate::session::{CompletionNotice, Phase, RoundState, SessionToken, Stats};

pub use crate::events::{EventKind, EventListener, EventRecorder, GameEvent};

pub use crate::engine::{GameEngine, GameSnapshot, RejectReason, Selection};
