//! Directional moves over a whole grid.
//!
//! ## Line mapping
//!
//! Every direction is described by one index mapping: line `k`, offset `p`
//! (with `p = 0` at the edge the tiles travel toward) to a grid
//! [`Position`]. A move gathers each line through the mapping, runs
//! [`merge_line`] on it, and scatters the result back through the same
//! mapping.
//!
//! | Direction | line `k` | offset `p` maps to |
//! |-----------|----------|--------------------|
//! | Left      | row `k`    | column `p`         |
//! | Right     | row `k`    | column `N - 1 - p` |
//! | Up        | column `k` | row `N - 1 - p`    |
//! | Down      | column `k` | row `p`            |
//!
//! Row 0 is the bottom row, so `Down` merges toward row 0.

use crate::core::{Direction, Grid, Position};

use super::line::merge_line;

/// Outcome of resolving one direction against a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The grid after sliding and merging. No tile has been spawned.
    pub grid: Grid,
    /// Sum of the per-line merge scores.
    pub score_delta: u64,
    /// True iff at least one cell differs from the input grid.
    pub changed: bool,
}

/// Grid position of offset `offset` within line `line` when moving `direction`.
#[must_use]
pub fn line_position(direction: Direction, size: usize, line: usize, offset: usize) -> Position {
    let far = size - 1 - offset;
    match direction {
        Direction::Left => Position::new(line, offset),
        Direction::Right => Position::new(line, far),
        Direction::Up => Position::new(far, line),
        Direction::Down => Position::new(offset, line),
    }
}

/// Read line `line` in the direction of travel.
#[must_use]
pub fn read_line(grid: &Grid, direction: Direction, line: usize) -> Vec<u64> {
    let size = grid.size();
    (0..size)
        .map(|offset| grid.get(line_position(direction, size, line, offset)))
        .collect()
}

/// Write `cells` back to line `line`; the inverse of [`read_line`].
pub fn write_line(grid: &mut Grid, direction: Direction, line: usize, cells: &[u64]) {
    let size = grid.size();
    debug_assert_eq!(cells.len(), size);
    for (offset, &value) in cells.iter().enumerate() {
        grid.set(line_position(direction, size, line, offset), value);
    }
}

/// Slide and merge every line of `grid` toward `direction`.
///
/// The input is left untouched; the caller decides whether to adopt
/// [`Resolution::grid`].
#[must_use]
pub fn resolve(grid: &Grid, direction: Direction) -> Resolution {
    let mut next = grid.clone();
    let mut score_delta = 0;
    let mut changed = false;

    for line in 0..grid.size() {
        let before = read_line(grid, direction, line);
        let merge = merge_line(&before);
        if merge.cells != before {
            changed = true;
            write_line(&mut next, direction, line, &merge.cells);
        }
        score_delta += merge.score;
    }

    Resolution {
        grid: next,
        score_delta,
        changed,
    }
}

/// Whether moving `direction` would change the grid.
#[must_use]
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let size = grid.size();
    (0..size).any(|line| {
        let cells = read_line(grid, direction, line);
        merge_line(&cells).cells != cells
    })
}

/// Directions that would change the grid, in [`Direction::ALL`] order.
#[must_use]
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}
