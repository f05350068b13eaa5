//! Tile spawning.
//!
//! Two operations:
//! - [`spawn_random_tile`] after every move that changed the board: one
//!   uniformly chosen empty cell gets a 2, or a 4 with `four_probability`
//! - [`initial_fill`] for a fresh board: distinct cells, always 2

use crate::core::{GameRng, Grid, Position};

/// Default probability of spawning a 4.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Place one tile on a uniformly chosen empty cell.
///
/// Returns where the tile went and its value, or `None` when the board has
/// no empty cell (a full board can still allow merges, so this is normal).
pub fn spawn_random_tile(
    grid: &mut Grid,
    rng: &mut GameRng,
    four_probability: f64,
) -> Option<(Position, u64)> {
    let empty = grid.empty_positions();
    let pos = *rng.choose(&empty)?;
    let value = if rng.gen_bool(four_probability) { 4 } else { 2 };
    grid.set(pos, value);
    Some((pos, value))
}

/// Put `count` tiles of value 2 on distinct cells of an empty board.
///
/// Cells are drawn uniformly without replacement from the whole board, and
/// `count` is clamped to the number of cells. Returns the chosen positions.
pub fn initial_fill(grid: &mut Grid, rng: &mut GameRng, count: usize) -> Vec<Position> {
    debug_assert_eq!(grid.count_empty(), grid.cells().len(), "initial fill expects an empty board");
    let size = grid.size();
    rng.sample_distinct(size * size, count)
        .into_iter()
        .map(|index| {
            let pos = Position::new(index / size, index % size);
            grid.set(pos, 2);
            pos
        })
        .collect()
}
