//! Python bindings for the rust-2048 board engine.
//!
//! The engine has no UI of its own; these bindings let a Python front end
//! (arcade, pygame, a notebook) own the window and drive a `Session`.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Session(size=4, best_score_path="/home/me/.2048_best_score.json")
//! outcome = game.apply_move("left")
//! if outcome.changed:
//!     print(game)
//!
//! state = game.snapshot()   # dict: size, grid, score, best_score, terminal_state
//! game.handle_key("r")      # reset
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// rust-2048: a 2048 board engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyMoveOutcome>()?;
    Ok(())
}
