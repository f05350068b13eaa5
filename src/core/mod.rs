//! Core engine types: grid, directions and inputs, RNG, configuration.
//!
//! These are pure data with accessors. The rules that act on them live in
//! [`crate::rules`].

pub mod config;
pub mod direction;
pub mod grid;
pub mod rng;

pub use config::{ConfigError, SessionConfig, SUPPORTED_SIZES};
pub use direction::{Direction, Input, ParseDirectionError};
pub use grid::{Grid, GridError, Position, MAX_TILE, MIN_SIZE};
pub use rng::GameRng;
