//! Session replacement and deferred-action cancellation tests.
//!
//! A new game or reset issued while a pair is on display must cancel the
//! pending resolution: the old tiles never change state after the new board
//! replaces them, and nothing from the old session reaches the new one.

use memory_tiles::board::{ImageKey, TileId, TileState};
use memory_tiles::core::{GameConfig, GameRng};
use memory_tiles::engine::{GameEngine, Selection};
use memory_tiles::events::{EventKind, EventRecorder, GameEvent};
use memory_tiles::session::{CompletionNotice, Phase};

fn layout(raw: &[u16]) -> Vec<ImageKey> {
    raw.iter().copied().map(ImageKey::new).collect()
}

fn engine_on(raw: &[u16]) -> (GameEngine, EventRecorder) {
    let pairs = (raw.len() / 2) as u16;
    let config = GameConfig::default().with_pairs_needed(pairs);
    let mut engine = GameEngine::with_layout(config, GameRng::new(3), &layout(raw)).unwrap();
    let recorder = EventRecorder::new();
    engine.add_listener(Box::new(recorder.clone()));
    (engine, recorder)
}

/// `new_game` mid-resolution drops the pending comparison.
#[test]
fn test_new_game_cancels_pending_resolution() {
    let (mut engine, recorder) = engine_on(&[1, 1, 2, 2]);

    engine.select_tile(TileId::new(0));
    engine.select_tile(TileId::new(1));
    let old_token = engine.token();
    engine.advance(400);

    engine.new_game_with_layout(&layout(&[2, 1, 1, 2])).unwrap();
    assert_ne!(engine.token(), old_token);
    recorder.drain();

    // Nothing from the old session is left to fire
    assert_eq!(engine.advance(600), 0);
    assert_eq!(engine.pending_actions(), 0);

    assert!(recorder.is_empty());
    assert_eq!(engine.board().count_in_state(TileState::Hidden), 4);
    assert_eq!(engine.stats().pairs_found, 0);
    assert_eq!(engine.stats().moves_count, 0);
    assert_eq!(engine.phase(), Phase::Idle);
}

/// A random new board is equally protected.
#[test]
fn test_random_new_game_cancels_pending_resolution() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 11).unwrap();

    engine.select_tile(TileId::new(0));
    engine.select_tile(TileId::new(1));
    engine.new_game().unwrap();

    let fresh = engine.board().clone();
    assert_eq!(engine.run_until_idle(), 0);

    assert_eq!(engine.board(), &fresh);
    assert_eq!(engine.stats().moves_count, 0);
}

/// `reset_game` mid-resolution drops the pending comparison too.
#[test]
fn test_reset_cancels_pending_resolution() {
    let (mut engine, recorder) = engine_on(&[1, 1, 2, 2]);

    engine.select_tile(TileId::new(0));
    engine.select_tile(TileId::new(1));
    engine.reset_game();
    recorder.drain();

    assert_eq!(engine.run_until_idle(), 0);
    assert!(recorder.is_empty());
    assert_eq!(engine.tile(TileId::new(0)).unwrap().state, TileState::Hidden);
    assert_eq!(engine.tile(TileId::new(1)).unwrap().state, TileState::Hidden);
}

/// The new session is playable immediately, and its own resolution is not
/// disturbed by the stale one falling due first.
#[test]
fn test_new_session_resolves_independently() {
    let (mut engine, _) = engine_on(&[1, 1, 2, 2]);

    engine.select_tile(TileId::new(0));
    engine.select_tile(TileId::new(2));
    engine.advance(900);
    engine.reset_game();

    assert_eq!(engine.select_tile(TileId::new(2)), Selection::Flipped);
    assert_eq!(
        engine.select_tile(TileId::new(3)),
        Selection::PairPending { resolves_at: 1900 }
    );

    // Nothing fires at the old deadline; the pair stays on display
    engine.advance(100);
    assert!(engine.round().is_resolving);
    assert_eq!(engine.tile(TileId::new(2)).unwrap().state, TileState::Flipped);

    engine.advance(899);
    assert!(engine.round().is_resolving);

    engine.advance(1);
    assert_eq!(engine.tile(TileId::new(2)).unwrap().state, TileState::Matched);
    assert_eq!(engine.tile(TileId::new(3)).unwrap().state, TileState::Matched);
    assert_eq!(engine.stats().pairs_found, 1);
}

/// A completion announcement from a replaced session never fires.
#[test]
fn test_stale_completion_is_not_announced() {
    let (mut engine, recorder) = engine_on(&[1, 1]);

    engine.select_tile(TileId::new(0));
    engine.select_tile(TileId::new(1));
    engine.advance(1000);
    assert_eq!(engine.completion_notice(), CompletionNotice::Pending);

    engine.new_game().unwrap();
    engine.run_until_idle();

    assert_eq!(recorder.count(EventKind::GameCompleted), 0);
    assert_eq!(engine.completion_notice(), CompletionNotice::Inactive);
}

/// Each session gets its own single completion event.
#[test]
fn test_one_completion_per_session() {
    let (mut engine, recorder) = engine_on(&[1, 1]);

    for _ in 0..3 {
        engine.select_tile(TileId::new(0));
        engine.select_tile(TileId::new(1));
        engine.run_until_idle();
        engine.reset_game();
    }

    assert_eq!(recorder.count(EventKind::GameCompleted), 3);
}

/// Reset keeps the layout but issues a fresh board snapshot.
#[test]
fn test_reset_emits_board_and_stats() {
    let (mut engine, recorder) = engine_on(&[1, 2, 2, 1]);

    engine.select_tile(TileId::new(0));
    engine.select_tile(TileId::new(3));
    engine.run_until_idle();
    recorder.drain();

    engine.reset_game();

    let events = recorder.drain();
    assert_eq!(events.len(), 2);
    match &events[0] {
        GameEvent::BoardChanged(board) => {
            assert_eq!(board.layout(), layout(&[1, 2, 2, 1]));
            assert_eq!(board.count_in_state(TileState::Hidden), 4);
        }
        other => panic!("expected BoardChanged, got {:?}", other),
    }
    assert_eq!(events[1].kind(), EventKind::StatsChanged);
}
