//! Deferred actions.
//!
//! The engine never sleeps. Pauses (the look-at-both-tiles delay before a
//! pair resolves and the pacing delay before the completion notice) are
//! entries in a [`DeferredQueue`] that fire when the host advances the
//! engine's logical clock past their due time.
//!
//! ## Cancellation
//!
//! Each entry carries the [`SessionToken`](crate::session::SessionToken)
//! that was current when it was scheduled. The engine compares it with the
//! live session before applying the entry, so starting a new game or
//! resetting during a pending resolution leaves the new session untouched.
//!
//! ```
//! use memory_tiles::schedule::{DeferredKind, DeferredQueue};
//! use memory_tiles::session::TokenIssuer;
//!
//! let token = TokenIssuer::new().issue();
//! let mut queue = DeferredQueue::new();
//! queue.schedule(1000, token, DeferredKind::ResolvePair);
//!
//! assert!(queue.pop_due(999).is_none());
//! assert!(queue.pop_due(1000).is_some());
//! ```

mod queue;

pub use queue::{Deferred, DeferredKind, DeferredQueue};
