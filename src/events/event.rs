//! Outbound game events.
//!
//! Events describe state changes after they happen. The engine fires them
//! in the order the changes are applied, so a host that replays them in
//! order always ends up with the engine's current view.

use serde::{Deserialize, Serialize};

use crate::board::{Board, TileId, TileState};
use crate::session::Stats;

/// Discriminant of a [`GameEvent`], for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    BoardChanged,
    StatsChanged,
    TileStateChanged,
    GameCompleted,
    CompletionDismissed,
}

/// A state change the presentation layer should reflect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was dealt, or every tile was turned face down.
    BoardChanged(Board),

    /// Move or pair counters changed.
    StatsChanged(Stats),

    /// A single tile changed face.
    TileStateChanged { tile: TileId, state: TileState },

    /// Every pair was found. Fired once per session, after the completion
    /// delay.
    GameCompleted { final_moves: u32 },

    /// The player closed the completion notice.
    CompletionDismissed,
}

impl GameEvent {
    /// The event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::BoardChanged(_) => EventKind::BoardChanged,
            GameEvent::StatsChanged(_) => EventKind::StatsChanged,
            GameEvent::TileStateChanged { .. } => EventKind::TileStateChanged,
            GameEvent::GameCompleted { .. } => EventKind::GameCompleted,
            GameEvent::CompletionDismissed => EventKind::CompletionDismissed,
        }
    }

    /// Create a tile event.
    #[must_use]
    pub fn tile(tile: TileId, state: TileState) -> Self {
        GameEvent::TileStateChanged { tile, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let stats = Stats {
            moves_count: 1,
            pairs_found: 0,
            pairs_needed: 8,
        };

        assert_eq!(GameEvent::StatsChanged(stats).kind(), EventKind::StatsChanged);
        assert_eq!(
            GameEvent::tile(TileId::new(2), TileState::Flipped).kind(),
            EventKind::TileStateChanged
        );
        assert_eq!(
            GameEvent::GameCompleted { final_moves: 9 }.kind(),
            EventKind::GameCompleted
        );
        assert_eq!(GameEvent::CompletionDismissed.kind(), EventKind::CompletionDismissed);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::tile(TileId::new(4), TileState::Matched);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
