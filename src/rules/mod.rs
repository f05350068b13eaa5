//! Board rules: the pure, deterministic half of the engine.
//!
//! - `line`: compress-and-merge of one line
//! - `resolver`: maps a direction onto lines and back
//! - `spawner`: new tiles (the only randomness, via `GameRng`)
//! - `terminal`: win and loss detection
//!
//! [`crate::session::Session`] strings these together into turns.

pub mod line;
pub mod resolver;
pub mod spawner;
pub mod terminal;

pub use line::{merge_line, LineMerge};
pub use resolver::{can_move, legal_moves, line_position, read_line, resolve, write_line, Resolution};
pub use spawner::{initial_fill, spawn_random_tile, FOUR_PROBABILITY};
pub use terminal::{evaluate, has_moves_possible, TerminalState, WIN_TILE};
