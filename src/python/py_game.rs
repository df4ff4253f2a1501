//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::TileId;
use crate::core::{GameConfig, GameError};
use crate::engine::GameEngine;
use crate::events::EventRecorder;

use super::py_core::{PyEvent, PyTile};

fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

/// Python wrapper for GameEngine.
///
/// The engine is single-threaded, so the class is bound to the thread that
/// created it.
#[pyclass(name = "MemoryGame", unsendable)]
pub struct PyMemoryGame {
    engine: GameEngine,
    recorder: EventRecorder,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a game and deal its first board.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible boards
    /// - image_pool_size: Images to choose from
    /// - pairs_needed: Pairs per board
    /// - resolution_delay_ms: Pause before a pair resolves
    /// - completion_delay_ms: Pause before the completion event
    #[new]
    #[pyo3(signature = (
        seed = 42,
        image_pool_size = 15,
        pairs_needed = 8,
        resolution_delay_ms = 1000,
        completion_delay_ms = 500
    ))]
    fn new(
        seed: u64,
        image_pool_size: u16,
        pairs_needed: u16,
        resolution_delay_ms: u64,
        completion_delay_ms: u64,
    ) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_image_pool_size(image_pool_size)
            .with_pairs_needed(pairs_needed)
            .with_resolution_delay_ms(resolution_delay_ms)
            .with_completion_delay_ms(completion_delay_ms);
        let mut engine = GameEngine::with_seed(config, seed).map_err(to_py_err)?;
        let recorder = EventRecorder::new();
        engine.add_listener(Box::new(recorder.clone()));
        Ok(Self { engine, recorder })
    }

    /// Select a tile. Returns False if the selection was ignored.
    fn select_tile(&mut self, tile_id: u16) -> bool {
        self.engine.select_tile(TileId::new(tile_id)).is_accepted()
    }

    /// Deal a new board.
    fn new_game(&mut self) -> PyResult<()> {
        self.engine.new_game().map_err(to_py_err)
    }

    /// Start over on the same layout.
    fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    /// Close the completion notice.
    fn dismiss_completion(&mut self) -> bool {
        self.engine.dismiss_completion()
    }

    /// Close the completion notice and deal a new board.
    fn play_again(&mut self) -> PyResult<()> {
        self.engine.play_again().map_err(to_py_err)
    }

    /// Advance the clock. Returns the number of deferred actions applied.
    fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.engine.advance(elapsed_ms)
    }

    /// Fire every pending deferred action.
    fn run_until_idle(&mut self) -> usize {
        self.engine.run_until_idle()
    }

    /// All tiles in slot order.
    fn tiles(&self) -> Vec<PyTile> {
        self.engine.board().iter().copied().map(PyTile).collect()
    }

    /// Take every event fired since the last call.
    fn drain_events(&self) -> Vec<PyEvent> {
        self.recorder.drain().into_iter().map(PyEvent).collect()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.engine.stats().moves_count
    }

    #[getter]
    fn pairs_found(&self) -> u32 {
        self.engine.stats().pairs_found
    }

    #[getter]
    fn pairs_needed(&self) -> u32 {
        self.engine.stats().pairs_needed
    }

    #[getter]
    fn phase(&self) -> String {
        format!("{:?}", self.engine.phase())
    }

    #[getter]
    fn started(&self) -> bool {
        self.engine.round().started
    }

    #[getter]
    fn now_ms(&self) -> u64 {
        self.engine.now_ms()
    }

    #[getter]
    fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    #[getter]
    fn final_moves(&self) -> Option<u32> {
        self.engine.final_moves()
    }

    fn __repr__(&self) -> String {
        format!("MemoryGame({}, phase={:?})", self.engine.stats(), self.engine.phase())
    }
}
