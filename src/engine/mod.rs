//! The game engine.
//!
//! [`GameEngine`] is the only stateful component. The presentation layer
//! forwards input to it ([`select_tile`](GameEngine::select_tile),
//! [`new_game`](GameEngine::new_game), [`reset_game`](GameEngine::reset_game),
//! [`dismiss_completion`](GameEngine::dismiss_completion)), drives its clock,
//! and renders from the events it fires.
//!
//! ## Turn cycle
//!
//! 1. First selection flips a tile (`Idle -> OneSelected`).
//! 2. Second selection flips a tile, counts a move and schedules the
//!    comparison (`OneSelected -> Resolving`).
//! 3. When the clock reaches the deadline, matching tiles become `Matched`,
//!    others turn back to `Hidden` (`Resolving -> Idle`).
//! 4. The last pair moves the session to `Completed` and schedules the
//!    one-shot `GameCompleted` event.

mod game;
mod selection;
mod snapshot;

pub use game::GameEngine;
pub use selection::{RejectReason, Selection};
pub use snapshot::GameSnapshot;
