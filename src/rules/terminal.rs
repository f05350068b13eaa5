//! Win and loss detection.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, Position};

/// Win tile of the standard game.
pub const WIN_TILE: u64 = 2048;

/// Where a session stands.
///
/// Only `Playing → Won`, `Playing → Lost` and `{Won, Lost} → Playing`
/// (by reset) ever happen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl TerminalState {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, TerminalState::Playing)
    }
}

impl std::fmt::Display for TerminalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TerminalState::Playing => "playing",
            TerminalState::Won => "won",
            TerminalState::Lost => "lost",
        })
    }
}

/// False iff every cell is filled and no two orthogonal neighbours match.
#[must_use]
pub fn has_moves_possible(grid: &Grid) -> bool {
    let size = grid.size();
    grid.positions().any(|pos| {
        let value = grid.get(pos);
        value == 0
            || (pos.col + 1 < size && value == grid.get(Position::new(pos.row, pos.col + 1)))
            || (pos.row + 1 < size && value == grid.get(Position::new(pos.row + 1, pos.col)))
    })
}

/// Classify a grid after a move that changed it.
///
/// The win check runs first and short-circuits, so a board holding the win
/// tile is `Won` even when it is also deadlocked.
#[must_use]
pub fn evaluate(grid: &Grid, win_tile: u64) -> TerminalState {
    if grid.contains(win_tile) {
        TerminalState::Won
    } else if !has_moves_possible(grid) {
        TerminalState::Lost
    } else {
        TerminalState::Playing
    }
}
