//! Move directions and the input vocabulary the engine understands.
//!
//! The presentation layer translates device events into [`Input`]; anything
//! it cannot translate is simply not passed on, so the core never sees it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    /// Toward the top row (row `N - 1`).
    Up,
    /// Toward the bottom row (row 0).
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Lowercase name, as accepted by [`str::parse`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown direction {0:?}")]
pub struct ParseDirectionError(pub String);

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Everything a player can ask the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Start a fresh game. Accepted in every state.
    Reset,
}

impl Input {
    /// Map a key name to an input: arrow names and `r` for reset.
    ///
    /// Returns `None` for keys the engine ignores.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "left" => Some(Input::MoveLeft),
            "right" => Some(Input::MoveRight),
            "up" => Some(Input::MoveUp),
            "down" => Some(Input::MoveDown),
            "r" => Some(Input::Reset),
            _ => None,
        }
    }

    /// The direction this input moves in, `None` for [`Input::Reset`].
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Input::MoveLeft => Some(Direction::Left),
            Input::MoveRight => Some(Direction::Right),
            Input::MoveUp => Some(Direction::Up),
            Input::MoveDown => Some(Direction::Down),
            Input::Reset => None,
        }
    }
}

impl From<Direction> for Input {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Input::MoveLeft,
            Direction::Right => Input::MoveRight,
            Direction::Up => Input::MoveUp,
            Direction::Down => Input::MoveDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" UP ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(ParseDirectionError("sideways".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_input_from_key() {
        assert_eq!(Input::from_key("Left"), Some(Input::MoveLeft));
        assert_eq!(Input::from_key("down"), Some(Input::MoveDown));
        assert_eq!(Input::from_key("R"), Some(Input::Reset));
        assert_eq!(Input::from_key("escape"), None);
        assert_eq!(Input::from_key("space"), None);
    }

    #[test]
    fn test_input_direction() {
        for direction in Direction::ALL {
            assert_eq!(Input::from(direction).direction(), Some(direction));
        }
        assert_eq!(Input::Reset.direction(), None);
    }
}
