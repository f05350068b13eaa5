//! Session bindings for Python.

use std::path::PathBuf;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Direction, Input, ParseDirectionError, SessionConfig};
use crate::session::{BestScoreStore, JsonFileStore, MemoryStore, MoveOutcome, Session};

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    #[getter]
    fn changed(&self) -> bool {
        self.0.changed
    }

    #[getter]
    fn score_delta(&self) -> u64 {
        self.0.score_delta
    }

    /// "playing", "won" or "lost".
    #[getter]
    fn terminal_state(&self) -> String {
        self.0.terminal_state.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(changed={}, score_delta={}, terminal_state='{}')",
            if self.0.changed { "True" } else { "False" },
            self.0.score_delta,
            self.0.terminal_state
        )
    }
}

/// Python wrapper for Session.
///
/// Pass `best_score_path` to persist the best score as JSON; without it the
/// best score lives only as long as the object.
#[pyclass(name = "Session", unsendable)]
pub struct PySession(pub Session);

#[pymethods]
impl PySession {
    #[new]
    #[pyo3(signature = (size = 4, seed = None, best_score_path = None))]
    fn new(size: usize, seed: Option<u64>, best_score_path: Option<PathBuf>) -> PyResult<Self> {
        let config = SessionConfig {
            seed,
            ..SessionConfig::default().with_size(size)
        };
        let store: Box<dyn BestScoreStore> = match best_score_path {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        };
        Session::new(config, store)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Play one turn: "left", "right", "up" or "down".
    fn apply_move(&mut self, direction: &str) -> PyResult<PyMoveOutcome> {
        let direction: Direction = direction
            .parse()
            .map_err(|e: ParseDirectionError| PyValueError::new_err(e.to_string()))?;
        Ok(PyMoveOutcome(self.0.apply_move(direction)))
    }

    /// Feed a key name ("left", ..., "r"). Unknown keys are ignored.
    ///
    /// Returns the move outcome, or None for reset and ignored keys.
    fn handle_key(&mut self, key: &str) -> Option<PyMoveOutcome> {
        let input = Input::from_key(key)?;
        self.0.handle_input(input).map(PyMoveOutcome)
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    /// Current state as a dict with keys size, grid, score, best_score,
    /// terminal_state. `grid[0]` is the bottom row.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let snap = self.0.snapshot();
        let dict = PyDict::new_bound(py);
        dict.set_item("size", snap.size)?;
        dict.set_item("grid", snap.grid.to_rows())?;
        dict.set_item("score", snap.score)?;
        dict.set_item("best_score", snap.best_score)?;
        dict.set_item("terminal_state", snap.terminal_state.to_string())?;
        Ok(dict)
    }

    #[getter]
    fn score(&self) -> u64 {
        self.0.score()
    }

    #[getter]
    fn best_score(&self) -> u64 {
        self.0.best_score()
    }

    #[getter]
    fn terminal_state(&self) -> String {
        self.0.terminal_state().to_string()
    }

    fn legal_moves(&self) -> Vec<String> {
        self.0.legal_moves().into_iter().map(|d| d.to_string()).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(size={}, score={}, best_score={}, terminal_state='{}')",
            self.0.grid().size(),
            self.0.score(),
            self.0.best_score(),
            self.0.terminal_state()
        )
    }

    fn __str__(&self) -> String {
        self.0.grid().to_string()
    }
}
