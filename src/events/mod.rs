//! Outbound notifications to the presentation layer.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: A state change with its data
//! - [`EventListener`]: Per-event callbacks with no-op defaults
//! - [`EventRecorder`]: A listener that buffers events for polling hosts
//!
//! The engine holds any number of listeners and fires every event to each of
//! them in registration order.

mod event;
mod listener;

pub use event::{EventKind, GameEvent};
pub use listener::{EventListener, EventRecorder};
