//! Python bindings for the memory-tiles engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_tiles as mt
//!
//! game = mt.MemoryGame(seed=7)
//! game.select_tile(0)
//! game.select_tile(1)
//! game.advance(1000)
//!
//! for event in game.drain_events():
//!     print(event.kind, event.tile, event.state)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memory-tiles: a tile-matching memory game engine.
#[pymodule]
fn memory_tiles(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTile>()?;
    m.add_class::<PyEvent>()?;
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
