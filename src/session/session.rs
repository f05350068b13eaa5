//! Turn orchestration.
//!
//! A `Session` owns one game: the grid, score, best score, terminal state,
//! RNG and best-score store. One call to [`Session::apply_move`] is one
//! turn:
//!
//! 1. Reject the move if the game is already won or lost
//! 2. Resolve the direction; stop here if nothing changed
//! 3. Adopt the new grid and add the merge score
//! 4. Spawn one tile if there is room
//! 5. Persist the best score if it was beaten
//! 6. Check for a win, then for a loss
//!
//! ## Best score
//!
//! The best score is loaded from the store once, when the session is
//! created. It is saved whenever the score exceeds it, and once more on
//! entering a terminal state if the store has never been written, even
//! when the score is not higher (including a score of 0).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::store::BestScoreStore;
use crate::core::{ConfigError, Direction, GameRng, Grid, Input, Position, SessionConfig};
use crate::rules::{self, TerminalState};

/// What a call to [`Session::apply_move`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the grid changed (and a turn was taken).
    pub changed: bool,
    /// Score gained from merges this turn.
    pub score_delta: u64,
    /// State after the turn.
    pub terminal_state: TerminalState,
}

impl MoveOutcome {
    fn unchanged(terminal_state: TerminalState) -> Self {
        Self {
            changed: false,
            score_delta: 0,
            terminal_state,
        }
    }
}

/// Read-only view of a session for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: usize,
    pub grid: Grid,
    pub score: u64,
    pub best_score: u64,
    pub terminal_state: TerminalState,
}

impl Snapshot {
    /// Value at `(row, col)`; row 0 is the bottom row.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u64 {
        self.grid.get(Position::new(row, col))
    }
}

/// One game of 2048.
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    score: u64,
    best_score: u64,
    terminal_state: TerminalState,
    rng: GameRng,
    store: Box<dyn BestScoreStore>,
}

impl Session {
    /// Start a game on a freshly filled board.
    pub fn new(config: SessionConfig, store: Box<dyn BestScoreStore>) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let best_score = store.load();

        let mut session = Self {
            grid: Grid::new(config.size),
            config,
            score: 0,
            best_score,
            terminal_state: TerminalState::Playing,
            rng,
            store,
        };
        session.fill_new_board();

        let size = session.config.size;
        info!(
            "new {size}x{size} session (seed {}, best score {})",
            session.rng.seed(),
            session.best_score
        );
        Ok(session)
    }

    /// Start a game from an existing board, e.g. a saved position.
    ///
    /// The grid's size overrides `config.size`. No tiles are added. A board
    /// that already holds the win tile or has no move left starts in the
    /// matching terminal state.
    pub fn with_grid(
        config: SessionConfig,
        grid: Grid,
        store: Box<dyn BestScoreStore>,
    ) -> Result<Self, ConfigError> {
        let config = SessionConfig {
            size: grid.size(),
            ..config
        };
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let best_score = store.load();
        let terminal_state = rules::evaluate(&grid, config.win_tile);

        Ok(Self {
            config,
            grid,
            score: 0,
            best_score,
            terminal_state,
            rng,
            store,
        })
    }

    /// Play one turn in `direction`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.terminal_state.is_terminal() {
            debug!("ignoring {direction}: game is {}", self.terminal_state);
            return MoveOutcome::unchanged(self.terminal_state);
        }

        let resolution = rules::resolve(&self.grid, direction);
        if !resolution.changed {
            return MoveOutcome::unchanged(self.terminal_state);
        }

        self.grid = resolution.grid;
        self.score += resolution.score_delta;
        rules::spawn_random_tile(&mut self.grid, &mut self.rng, self.config.four_probability);

        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save(self.best_score);
        }

        self.terminal_state = rules::evaluate(&self.grid, self.config.win_tile);
        if self.terminal_state.is_terminal() {
            self.on_game_over();
        }

        debug!(
            "moved {direction}:\n{}\nscore {} best {}",
            self.grid, self.score, self.best_score
        );

        MoveOutcome {
            changed: true,
            score_delta: resolution.score_delta,
            terminal_state: self.terminal_state,
        }
    }

    /// Dispatch a player input. Moves return their outcome; reset returns `None`.
    pub fn handle_input(&mut self, input: Input) -> Option<MoveOutcome> {
        match input.direction() {
            Some(direction) => Some(self.apply_move(direction)),
            None => {
                self.reset();
                None
            }
        }
    }

    /// Start over on a fresh board. The best score is kept.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.size);
        self.score = 0;
        self.terminal_state = TerminalState::Playing;
        self.fill_new_board();
        info!("session reset");
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.grid.size(),
            grid: self.grid.clone(),
            score: self.score,
            best_score: self.best_score,
            terminal_state: self.terminal_state,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[must_use]
    pub fn terminal_state(&self) -> TerminalState {
        self.terminal_state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The best-score store this session writes to.
    #[must_use]
    pub fn store(&self) -> &dyn BestScoreStore {
        &*self.store
    }

    /// Directions that would change the board right now.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.terminal_state.is_terminal() {
            return Vec::new();
        }
        rules::legal_moves(&self.grid)
    }

    fn fill_new_board(&mut self) {
        rules::initial_fill(&mut self.grid, &mut self.rng, self.config.initial_tiles);
    }

    fn on_game_over(&mut self) {
        info!("game {} with score {}", self.terminal_state, self.score);
        if self.score > self.best_score || !self.store.has_record() {
            self.best_score = self.best_score.max(self.score);
            self.store.save(self.best_score);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("score", &self.score)
            .field("best_score", &self.best_score)
            .field("terminal_state", &self.terminal_state)
            .finish_non_exhaustive()
    }
}
