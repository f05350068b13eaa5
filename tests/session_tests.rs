//! End-to-end session behaviour.
//!
//! These tests drive `Session` only through its public contract:
//! inputs in, outcomes and snapshots out.

use rust_2048::core::Position;
use rust_2048::{
    BestScoreStore, Direction, Grid, Input, JsonFileStore, MemoryStore, Session, SessionConfig,
    TerminalState, SUPPORTED_SIZES,
};

fn non_empty(grid: &Grid) -> Vec<u64> {
    grid.cells().iter().copied().filter(|&v| v != 0).collect()
}

/// Play a deterministic game to the end (or a move cap).
fn play_out(session: &mut Session, max_moves: usize) -> usize {
    let order = [Direction::Down, Direction::Left, Direction::Right, Direction::Up];
    let mut moves = 0;
    while session.terminal_state() == TerminalState::Playing && moves < max_moves {
        let legal = session.legal_moves();
        let Some(&direction) = order.iter().find(|&d| legal.contains(d)) else {
            break;
        };
        let outcome = session.apply_move(direction);
        assert!(outcome.changed, "legal move {direction} did not change the board");
        moves += 1;
    }
    moves
}

/// Test every offered board size starts with two 2-tiles.
#[test]
fn test_supported_sizes_start_correctly() {
    for size in SUPPORTED_SIZES {
        let config = SessionConfig::default().with_size(size).with_seed(size as u64);
        let session = Session::new(config, Box::new(MemoryStore::new())).unwrap();
        let snap = session.snapshot();

        assert_eq!(snap.size, size);
        assert_eq!(snap.grid.cells().len(), size * size);
        assert_eq!(non_empty(&snap.grid), vec![2, 2]);
    }
}

/// Test that score only grows and tile sums only grow during a game.
#[test]
fn test_score_and_tile_sum_monotonic() {
    let config = SessionConfig::default().with_seed(2024);
    let mut session = Session::new(config, Box::new(MemoryStore::new())).unwrap();

    let mut last_score = 0;
    let mut last_sum = session.grid().tile_sum();
    for _ in 0..300 {
        let Some(&direction) = session.legal_moves().first() else {
            break;
        };
        let before = session.snapshot();
        let outcome = session.apply_move(direction);

        assert_eq!(session.score(), before.score + outcome.score_delta);
        assert!(session.score() >= last_score);
        // Merges keep the sum; the spawn adds 2 or 4
        let sum = session.grid().tile_sum();
        assert!(sum == last_sum + 2 || sum == last_sum + 4, "sum went {last_sum} -> {sum}");

        last_score = session.score();
        last_sum = sum;
    }
}

/// Test that every cell stays 0 or a power of two >= 2.
#[test]
fn test_cells_stay_valid() {
    let config = SessionConfig::default().with_size(5).with_seed(11);
    let mut session = Session::new(config, Box::new(MemoryStore::new())).unwrap();
    play_out(&mut session, 2_000);

    assert!(session
        .grid()
        .cells()
        .iter()
        .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));
}

/// Test a full game ends in a terminal state that then freezes the board.
#[test]
fn test_game_to_completion() {
    let config = SessionConfig::default().with_seed(42).with_win_tile(64);
    let mut session = Session::new(config, Box::new(MemoryStore::new())).unwrap();

    play_out(&mut session, 10_000);
    let state = session.terminal_state();
    assert!(state.is_terminal(), "game did not finish");

    let frozen = session.snapshot();
    for direction in Direction::ALL {
        let outcome = session.apply_move(direction);
        assert!(!outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.terminal_state, state);
    }
    assert_eq!(session.snapshot(), frozen);

    // Any terminal state leaves a record behind
    assert!(session.store().has_record());
    assert_eq!(session.store().load(), session.best_score());
}

/// Test reset after a terminal state restores a fresh game and keeps the best score.
#[test]
fn test_reset_scenario() {
    let config = SessionConfig::default().with_seed(8).with_win_tile(32);
    let mut session = Session::new(config, Box::new(MemoryStore::new())).unwrap();
    play_out(&mut session, 10_000);
    assert!(session.terminal_state().is_terminal());
    let best = session.best_score();

    assert_eq!(session.handle_input(Input::Reset), None);

    let snap = session.snapshot();
    assert_eq!(snap.terminal_state, TerminalState::Playing);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.best_score, best);
    assert_eq!(non_empty(&snap.grid), vec![2, 2]);
}

/// Test reset is also honoured mid-game.
#[test]
fn test_reset_while_playing() {
    let config = SessionConfig::default().with_seed(3);
    let mut session = Session::new(config, Box::new(MemoryStore::with_record(40))).unwrap();
    play_out(&mut session, 10);

    session.reset();
    assert_eq!(session.score(), 0);
    assert!(session.best_score() >= 40);
    assert_eq!(non_empty(session.grid()), vec![2, 2]);
}

/// Test ignored keys never reach the session.
#[test]
fn test_key_dispatch() {
    let grid = Grid::from_rows(vec![vec![2, 2, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
    let mut session = Session::with_grid(
        SessionConfig::default().with_seed(1),
        grid,
        Box::new(MemoryStore::new()),
    )
    .unwrap();

    assert_eq!(Input::from_key("space"), None);

    let input = Input::from_key("left").unwrap();
    let outcome = session.handle_input(input).unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 4);
    assert_eq!(session.grid().get(Position::new(0, 0)), 4);
}

/// Test best score survives across sessions through the JSON store.
#[test]
fn test_best_score_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");

    let grid = Grid::from_rows(vec![
        vec![8, 8, 2, 4],
        vec![2, 4, 8, 16],
        vec![4, 8, 16, 32],
        vec![2, 4, 8, 16],
    ])
    .unwrap();
    let mut first = Session::with_grid(
        SessionConfig::default().with_seed(5),
        grid,
        Box::new(JsonFileStore::new(&path)),
    )
    .unwrap();
    assert_eq!(first.best_score(), 0);

    first.apply_move(Direction::Left);
    assert_eq!(first.score(), 16);
    drop(first);

    let second = Session::new(
        SessionConfig::default().with_seed(6),
        Box::new(JsonFileStore::new(&path)),
    )
    .unwrap();
    assert_eq!(second.best_score(), 16);
    assert_eq!(second.score(), 0);
}

/// Test an unreadable store degrades to a zero best score.
#[test]
fn test_corrupt_store_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    std::fs::write(&path, b"{\"best_score\": \"lots\"}").unwrap();

    let session = Session::new(
        SessionConfig::default().with_seed(1),
        Box::new(JsonFileStore::new(&path)),
    )
    .unwrap();
    assert_eq!(session.best_score(), 0);
}

/// Test the snapshot is serializable for front ends that want JSON.
#[test]
fn test_snapshot_serde() {
    let session = Session::new(
        SessionConfig::default().with_seed(10),
        Box::new(MemoryStore::new()),
    )
    .unwrap();
    let snap = session.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let back: rust_2048::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snap, back);
}
