//! # rust-2048
//!
//! The board engine of the 2048 sliding-tile puzzle, with no UI attached.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Sliding, merging and terminal detection are
//!    deterministic functions of grid and direction. Only the spawner
//!    draws random numbers, from a seedable `GameRng`.
//!
//! 2. **Explicit orientation**: Each direction is an index mapping from
//!    (line, offset) to a grid position, so the 1-D merge never needs to
//!    know which way it is facing.
//!
//! 3. **No globals**: A `Session` value holds one game. The presentation
//!    layer owns it, feeds it inputs and draws its snapshots.
//!
//! ## Modules
//!
//! - `core`: Grid, directions and inputs, RNG, configuration
//! - `rules`: Line merge, move resolver, spawner, terminal detector
//! - `session`: Turn orchestration, snapshots, best-score persistence
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, MemoryStore, Session, SessionConfig, TerminalState};
//!
//! let config = SessionConfig::default().with_seed(42);
//! let mut session = Session::new(config, Box::new(MemoryStore::new())).unwrap();
//!
//! let outcome = session.apply_move(Direction::Left);
//! if outcome.changed {
//!     println!("{}", session.grid());
//! }
//! assert_eq!(session.snapshot().terminal_state, TerminalState::Playing);
//! ```

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, GameRng, Grid, GridError, Input, ParseDirectionError, Position,
    SessionConfig, SUPPORTED_SIZES,
};

pub use crate::rules::{
    merge_line, resolve, LineMerge, Resolution, TerminalState, FOUR_PROBABILITY, WIN_TILE,
};

pub use crate::session::{
    BestScoreStore, JsonFileStore, MemoryStore, MoveOutcome, Session, Snapshot, StoreError,
};
