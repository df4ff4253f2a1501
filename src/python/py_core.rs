//! Tile and event bindings for Python.

use pyo3::prelude::*;

use crate::board::Tile;
use crate::events::GameEvent;

/// Python view of a tile.
#[pyclass(name = "Tile")]
#[derive(Clone, Debug)]
pub struct PyTile(pub Tile);

#[pymethods]
impl PyTile {
    /// Board slot (0-based).
    #[getter]
    fn id(&self) -> u16 {
        self.0.id.0
    }

    /// Image key (1-based).
    #[getter]
    fn image(&self) -> u16 {
        self.0.image.raw()
    }

    /// "hidden", "flipped" or "matched".
    #[getter]
    fn state(&self) -> &'static str {
        self.0.state.as_str()
    }

    /// Filename of this tile's image.
    fn asset_name(&self) -> String {
        self.0.image.asset_name()
    }

    fn __repr__(&self) -> String {
        format!(
            "Tile(id={}, image={}, state={})",
            self.0.id.0,
            self.0.image.raw(),
            self.0.state.as_str()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python view of an engine event.
#[pyclass(name = "Event")]
#[derive(Clone, Debug)]
pub struct PyEvent(pub GameEvent);

#[pymethods]
impl PyEvent {
    /// Event name, e.g. "TileStateChanged".
    #[getter]
    fn kind(&self) -> String {
        format!("{:?}", self.0.kind())
    }

    /// Tile id for tile events.
    #[getter]
    fn tile(&self) -> Option<u16> {
        match &self.0 {
            GameEvent::TileStateChanged { tile, .. } => Some(tile.0),
            _ => None,
        }
    }

    /// New tile state for tile events.
    #[getter]
    fn state(&self) -> Option<&'static str> {
        match &self.0 {
            GameEvent::TileStateChanged { state, .. } => Some(state.as_str()),
            _ => None,
        }
    }

    /// (moves, pairs_found, pairs_needed) for stats events.
    #[getter]
    fn stats(&self) -> Option<(u32, u32, u32)> {
        match &self.0 {
            GameEvent::StatsChanged(s) => Some((s.moves_count, s.pairs_found, s.pairs_needed)),
            _ => None,
        }
    }

    /// Final move count for the completion event.
    #[getter]
    fn final_moves(&self) -> Option<u32> {
        match &self.0 {
            GameEvent::GameCompleted { final_moves } => Some(*final_moves),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("Event({:?})", self.0)
    }
}
