//! Game state management for the canvas puzzle

use crate::animations::BoxRow;
use bubble_core::{
    Clock, EventLog, PuzzleConfig, PuzzleError, PuzzleEvent, PuzzleState, Renderer, Shuffler,
    SwapStep,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notifications kept for a page that has not collected them
pub const MAX_PENDING_EVENTS: usize = 256;

/// `performance.now()` as a [`Clock`], falling back to `Date.now()` where
/// there is no window (workers)
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now(&self) -> Duration {
        let ms = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now);
        Duration::from_secs_f64(ms.max(0.0) / 1000.0)
    }
}

/// Sends every notification to two renderers
struct Tee<'a, A: ?Sized, B: ?Sized>(&'a mut A, &'a mut B);

impl<A: Renderer + ?Sized, B: Renderer + ?Sized> Renderer for Tee<'_, A, B> {
    fn highlighted(&mut self, position: usize) {
        self.0.highlighted(position);
        self.1.highlighted(position);
    }

    fn swapped(&mut self, first: usize, second: usize, arrangement: &[u32]) {
        self.0.swapped(first, second, arrangement);
        self.1.swapped(first, second, arrangement);
    }

    fn mismatched(&mut self, first: usize, second: usize) {
        self.0.mismatched(first, second);
        self.1.mismatched(first, second);
    }

    fn solved(&mut self) {
        self.0.solved();
        self.1.solved();
    }
}

/// Snapshot handed to page scripts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub arrangement: Vec<u32>,
    pub remaining_swaps: usize,
    pub swaps_made: usize,
    pub mistakes: usize,
    pub selection: Option<usize>,
    pub solved: bool,
}

/// The game state
pub struct GameState<C: Clock + Clone + 'static = PerformanceClock> {
    puzzle: PuzzleState,
    row: BoxRow,
    /// Notifications not yet collected by the page, newest `MAX_PENDING_EVENTS`
    events: EventLog,
    /// Keyboard cursor
    cursor: usize,
    message: Option<String>,
    clock: C,
}

impl<C: Clock + Clone + 'static> GameState<C> {
    /// Create a new game with a shuffled row
    pub fn new<S>(config: PuzzleConfig, shuffler: &mut S, clock: C) -> Result<Self, PuzzleError>
    where
        S: Shuffler + ?Sized,
    {
        let puzzle = PuzzleState::new(config, shuffler, clock.clone())?;
        Ok(Self::with_puzzle(puzzle, clock))
    }

    /// Create a game from a known row
    pub fn from_arrangement(
        arrangement: Vec<u32>,
        config: PuzzleConfig,
        clock: C,
    ) -> Result<Self, PuzzleError> {
        let puzzle = PuzzleState::from_arrangement(arrangement, config, clock.clone())?;
        Ok(Self::with_puzzle(puzzle, clock))
    }

    fn with_puzzle(puzzle: PuzzleState, clock: C) -> Self {
        let mut row = BoxRow::new(puzzle.arrangement());
        row.set_time(Self::ms(&clock));
        let message = if puzzle.is_solved() {
            row.mark_solved();
            Some("Already sorted!".to_string())
        } else {
            None
        };
        Self {
            puzzle,
            row,
            events: EventLog::bounded(MAX_PENDING_EVENTS),
            cursor: 0,
            message,
            clock,
        }
    }

    fn ms(clock: &C) -> f64 {
        clock.now().as_secs_f64() * 1000.0
    }

    pub fn row(&self) -> &BoxRow {
        &self.row
    }

    pub fn len(&self) -> usize {
        self.puzzle.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn arrangement(&self) -> &[u32] {
        self.puzzle.arrangement()
    }

    pub fn remaining_swaps(&self) -> usize {
        self.puzzle.remaining_swaps()
    }

    pub fn swaps_made(&self) -> usize {
        self.puzzle.swaps_made()
    }

    pub fn mistakes(&self) -> usize {
        self.puzzle.mismatches()
    }

    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }

    /// Whether the solved banner should show
    pub fn is_celebrating(&self) -> bool {
        self.puzzle.solved_notified() || (self.puzzle.is_solved() && !self.puzzle.solve_pending())
    }

    pub fn next_step(&self) -> Option<SwapStep> {
        self.puzzle.next_step()
    }

    pub fn is_animating(&self) -> bool {
        self.row.is_animating() || self.puzzle.solve_pending()
    }

    /// Select a box by position
    pub fn select_box(&mut self, position: usize) {
        self.row.set_time(Self::ms(&self.clock));
        if position < self.puzzle.len() {
            self.cursor = position;
        }
        self.message = None;
        self.puzzle
            .select_position(position, &mut Tee(&mut self.row, &mut self.events));
    }

    /// Update animations and deliver a due solve (called each frame)
    pub fn tick(&mut self) {
        self.row.set_time(Self::ms(&self.clock));
        self.puzzle.poll(&mut Tee(&mut self.row, &mut self.events));
    }

    /// Take the notifications recorded since the last call
    pub fn take_events(&mut self) -> Vec<PuzzleEvent> {
        self.events.drain()
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            arrangement: self.puzzle.arrangement().to_vec(),
            remaining_swaps: self.puzzle.remaining_swaps(),
            swaps_made: self.puzzle.swaps_made(),
            mistakes: self.puzzle.mismatches(),
            selection: self.puzzle.selection(),
            solved: self.puzzle.is_solved(),
        }
    }

    /// Handle keyboard input by `KeyboardEvent.key` name
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" | "h" => self.cursor = self.cursor.saturating_sub(1),
            "ArrowRight" | "l" => {
                self.cursor = (self.cursor + 1).min(self.puzzle.len().saturating_sub(1));
            }
            " " | "Enter" => self.select_box(self.cursor),
            "?" => {
                self.message = Some(match self.puzzle.next_step() {
                    Some(step) => {
                        format!("Next swap: boxes {} and {}", step.left() + 1, step.right() + 1)
                    }
                    None => "Nothing left to swap.".to_string(),
                });
            }
            _ => match key.parse::<usize>() {
                Ok(digit @ 1..=9) => self.select_box(digit - 1),
                _ => return false,
            },
        }
        true
    }
}
