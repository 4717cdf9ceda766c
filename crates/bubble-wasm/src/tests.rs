//! Tests for the canvas game state

use crate::game::{GameState, MAX_PENDING_EVENTS};
use crate::render::CanvasLayout;
use crate::theme::{Color, Theme};
use bubble_core::{FixedShuffler, ManualClock, PuzzleConfig, PuzzleEvent, SOLVE_DELAY};
use std::time::Duration;

fn game(arrangement: &[u32]) -> (GameState<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let state =
        GameState::from_arrangement(arrangement.to_vec(), PuzzleConfig::default(), clock.clone())
            .unwrap();
    (state, clock)
}

#[test]
fn test_game_state_new() {
    let mut shuffler = FixedShuffler::new(vec![3, 1, 2]);
    let state =
        GameState::new(PuzzleConfig::with_size(3), &mut shuffler, ManualClock::new()).unwrap();
    assert_eq!(state.arrangement(), &[3, 1, 2]);
    assert_eq!(state.remaining_swaps(), 2);
    assert_eq!(state.cursor(), 0);
    assert!(!state.is_solved());
    assert!(!state.is_celebrating());
    assert!(state.message().is_none());
}

#[test]
fn test_full_game_events() {
    let (mut state, clock) = game(&[3, 1, 2]);

    state.select_box(0);
    state.select_box(1);
    state.select_box(0);
    state.select_box(2);
    state.select_box(1);
    state.select_box(2);

    let events = state.take_events();
    assert_eq!(
        events.iter().filter(|e| matches!(e, PuzzleEvent::Swapped { .. })).count(),
        2
    );
    assert!(events.contains(&PuzzleEvent::Mismatched { first: 0, second: 2 }));
    assert_eq!(state.arrangement(), &[1, 2, 3]);
    assert!(state.is_solved());
    assert!(!state.is_celebrating());
    assert!(state.is_animating());

    state.tick();
    assert!(state.take_events().is_empty());

    clock.advance(SOLVE_DELAY);
    state.tick();
    assert_eq!(state.take_events(), vec![PuzzleEvent::Solved]);
    assert!(state.is_celebrating());
}

#[test]
fn test_uncollected_events_are_capped() {
    let (mut state, _clock) = game(&[3, 1, 2]);
    for _ in 0..MAX_PENDING_EVENTS {
        state.select_box(1);
        state.select_box(2);
    }
    let events = state.take_events();
    assert_eq!(events.len(), MAX_PENDING_EVENTS);
    assert_eq!(events.last(), Some(&PuzzleEvent::Mismatched { first: 1, second: 2 }));
    assert_eq!(state.mistakes(), MAX_PENDING_EVENTS);
    assert!(state.take_events().is_empty());
}

#[test]
fn test_swap_animation_follows_clock() {
    let (mut state, clock) = game(&[2, 1]);
    state.select_box(0);
    state.select_box(1);

    assert_eq!(state.row().draw_slot(0), 1.0);
    clock.advance(Duration::from_millis(500));
    state.tick();
    let mid = state.row().draw_slot(0);
    assert!(mid > 0.0 && mid < 1.0);

    clock.advance(Duration::from_millis(500));
    state.tick();
    assert_eq!(state.row().draw_slot(0), 0.0);
}

#[test]
fn test_mismatch_flash() {
    let theme = Theme::light();
    let (mut state, clock) = game(&[2, 1, 3]);
    state.select_box(1);
    assert_eq!(state.row().fill(1, &theme), theme.box_selected);
    state.select_box(2);

    clock.advance(Duration::from_millis(500));
    state.tick();
    assert_eq!(state.row().fill(1, &theme), theme.box_error);

    clock.advance(Duration::from_millis(500));
    state.tick();
    assert_eq!(state.row().fill(1, &theme), theme.box_fill);
    assert!(!state.is_animating());
}

#[test]
fn test_keyboard() {
    let (mut state, _clock) = game(&[1, 3, 2]);
    assert!(state.handle_key("ArrowRight"));
    assert!(state.handle_key(" "));
    assert!(state.handle_key("l"));
    assert!(state.handle_key("Enter"));
    assert_eq!(state.arrangement(), &[1, 2, 3]);

    assert!(!state.handle_key("x"));
    assert!(!state.handle_key("0"));
}

#[test]
fn test_digit_keys_and_hint() {
    let (mut state, _clock) = game(&[3, 1, 2]);
    assert!(state.handle_key("?"));
    assert_eq!(state.message(), Some("Next swap: boxes 1 and 2"));

    state.handle_key("1");
    state.handle_key("2");
    assert_eq!(state.arrangement(), &[1, 3, 2]);
    assert_eq!(state.cursor(), 1);
    assert!(state.message().is_none());
}

#[test]
fn test_sorted_start() {
    let (state, _clock) = game(&[1, 2, 3]);
    let theme = Theme::dark();
    assert!(state.is_solved());
    assert!(state.is_celebrating());
    assert_eq!(state.message(), Some("Already sorted!"));
    assert_eq!(state.row().fill(0, &theme), theme.box_success);
}

#[test]
fn test_status_snapshot() {
    let (mut state, _clock) = game(&[2, 1]);
    state.select_box(1);
    let status = state.status();
    assert_eq!(status.selection, Some(1));
    assert_eq!(status.remaining_swaps, 1);

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["arrangement"], serde_json::json!([2, 1]));
    assert_eq!(json["solved"], serde_json::json!(false));
}

#[test]
fn test_canvas_hit_test() {
    let layout = CanvasLayout::compute(1000.0, 240.0, 8);
    assert_eq!(layout.box_width, 100.0);
    let y = layout.boxes_y + 10.0;
    assert_eq!(layout.hit_test(100.0, y), Some(0));
    assert_eq!(layout.hit_test(250.0, y), Some(1));
    assert_eq!(layout.hit_test(899.0, y), Some(7));
    assert_eq!(layout.hit_test(900.0, y), None);
    assert_eq!(layout.hit_test(50.0, y), None);
    assert_eq!(layout.hit_test(250.0, 0.0), None);
}

#[test]
fn test_color_lerp() {
    let a = Color::new(0, 0, 0);
    let b = Color::new(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 2.0), b);
    assert_eq!(a.lerp(b, 0.5), Color::new(100, 50, 25));
    assert_eq!(b.as_css(), "rgb(200, 100, 50)");
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::game::PerformanceClock;
    use bubble_core::Clock;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn performance_clock_is_monotonic() {
        let clock = PerformanceClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
