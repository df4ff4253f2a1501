//! Listener trait and a recording listener.

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::{Board, TileId, TileState};
use crate::session::Stats;

use super::event::{EventKind, GameEvent};

/// Receives engine events.
///
/// Implement the per-event methods you care about; the rest default to
/// no-ops. [`on_event`](EventListener::on_event) dispatches to them and can
/// be overridden to receive every event as a value instead.
pub trait EventListener {
    fn on_board_changed(&mut self, _board: &Board) {}

    fn on_stats_changed(&mut self, _stats: Stats) {}

    fn on_tile_state_changed(&mut self, _tile: TileId, _state: TileState) {}

    fn on_game_completed(&mut self, _final_moves: u32) {}

    fn on_completion_dismissed(&mut self) {}

    /// Dispatch an event to the matching method.
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BoardChanged(board) => self.on_board_changed(board),
            GameEvent::StatsChanged(stats) => self.on_stats_changed(*stats),
            GameEvent::TileStateChanged { tile, state } => self.on_tile_state_changed(*tile, *state),
            GameEvent::GameCompleted { final_moves } => self.on_game_completed(*final_moves),
            GameEvent::CompletionDismissed => self.on_completion_dismissed(),
        }
    }
}

/// Listener that stores every event it receives.
///
/// Clones share the same buffer, so keep one handle and register another
/// with the engine:
///
/// ```
/// use memory_tiles::core::{GameConfig, GameRng};
/// use memory_tiles::engine::GameEngine;
/// use memory_tiles::events::{EventKind, EventRecorder};
///
/// let recorder = EventRecorder::new();
/// let mut engine = GameEngine::new(GameConfig::default(), GameRng::new(1)).unwrap();
/// engine.add_listener(Box::new(recorder.clone()));
///
/// engine.new_game().unwrap();
/// assert_eq!(recorder.kinds(), vec![EventKind::BoardChanged, EventKind::StatsChanged]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Kinds of every event recorded so far.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(GameEvent::kind).collect()
    }

    /// Number of recorded events of `kind`.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind() == kind).count()
    }

    /// Take every recorded event, leaving the buffer empty.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventListener for EventRecorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
