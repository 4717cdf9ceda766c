//! The two-click swap puzzle
//!
//! A [`PuzzleState`] holds a shuffled row of boxes numbered `1..=N` and the
//! swaps bubble sort would make to sort it. The player selects two boxes at a
//! time; the pair is swapped only if it is exactly the next swap of the
//! trace. Matching is by position, never by value, so the player has to
//! follow bubble sort's comparison order rather than just reach a sorted row.

use crate::clock::Clock;
use crate::error::PuzzleError;
use crate::renderer::Renderer;
use crate::shuffle::Shuffler;
use crate::trace::{compute_trace, SwapStep};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Number of boxes when nothing else is asked for
pub const DEFAULT_SIZE: usize = 8;

/// Time between the final swap and the `solved` notification (the length of
/// the swap animation)
pub const SOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Puzzle construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of boxes
    pub size: usize,
    /// Delay before `solved` is reported
    pub solve_delay: Duration,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            solve_delay: SOLVE_DELAY,
        }
    }
}

impl PuzzleConfig {
    /// Config for `size` boxes with the default solve delay
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Validate a size coming from an untyped source (JS, command line)
    pub fn from_raw_size(raw: i64) -> Result<Self, PuzzleError> {
        let size = usize::try_from(raw).map_err(|_| PuzzleError::InvalidSize { requested: raw })?;
        Ok(Self::with_size(size))
    }

    pub fn solve_delay(mut self, delay: Duration) -> Self {
        self.solve_delay = delay;
        self
    }
}

/// Where the selection protocol currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No box selected
    Idle,
    /// One box selected, waiting for the second
    AwaitingSecond,
    /// Every swap of the trace has been made
    Solved,
}

/// One puzzle session
pub struct PuzzleState {
    arrangement: Vec<u32>,
    initial: Vec<u32>,
    /// Swaps still to be made, head first
    trace: VecDeque<SwapStep>,
    /// First click of a pending pair
    selection: Option<usize>,
    swaps_made: usize,
    mismatches: usize,
    solve_delay: Duration,
    clock: Box<dyn Clock>,
    /// When the `solved` notification becomes due
    solve_due: Option<Duration>,
    solved_notified: bool,
}

impl PuzzleState {
    /// Create a puzzle with a shuffled row of `config.size` boxes
    pub fn new<S, C>(config: PuzzleConfig, shuffler: &mut S, clock: C) -> Result<Self, PuzzleError>
    where
        S: Shuffler + ?Sized,
        C: Clock + 'static,
    {
        let arrangement = shuffler.permutation(config.size);
        Self::from_arrangement(arrangement, config, clock)
    }

    /// Create a puzzle from a known starting row.
    ///
    /// `arrangement` must be a permutation of `1..=len`; `config.size` is
    /// ignored in favour of its length.
    pub fn from_arrangement<C>(
        arrangement: Vec<u32>,
        config: PuzzleConfig,
        clock: C,
    ) -> Result<Self, PuzzleError>
    where
        C: Clock + 'static,
    {
        if !is_permutation(&arrangement) {
            return Err(PuzzleError::InvalidArrangement { arrangement });
        }

        let trace: VecDeque<SwapStep> = compute_trace(&arrangement).into();
        info!(
            size = arrangement.len(),
            swaps = trace.len(),
            ?arrangement,
            "new puzzle"
        );

        Ok(Self {
            initial: arrangement.clone(),
            arrangement,
            trace,
            selection: None,
            swaps_made: 0,
            mismatches: 0,
            solve_delay: config.solve_delay,
            clock: Box::new(clock),
            solve_due: None,
            solved_notified: false,
        })
    }

    /// Number of boxes
    pub fn len(&self) -> usize {
        self.arrangement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrangement.is_empty()
    }

    /// Current left-to-right row
    pub fn arrangement(&self) -> &[u32] {
        &self.arrangement
    }

    /// The row the puzzle started from
    pub fn initial_arrangement(&self) -> &[u32] {
        &self.initial
    }

    /// Swaps still expected, next one first
    pub fn remaining(&self) -> impl ExactSizeIterator<Item = &SwapStep> + '_ {
        self.trace.iter()
    }

    /// Number of swaps still expected
    pub fn remaining_swaps(&self) -> usize {
        self.trace.len()
    }

    /// The swap bubble sort makes next
    pub fn next_step(&self) -> Option<SwapStep> {
        self.trace.front().copied()
    }

    /// The first box of a pending pair, if any
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        if self.trace.is_empty() {
            Phase::Solved
        } else if self.selection.is_some() {
            Phase::AwaitingSecond
        } else {
            Phase::Idle
        }
    }

    pub fn is_solved(&self) -> bool {
        self.trace.is_empty()
    }

    /// Confirmed swaps so far
    pub fn swaps_made(&self) -> usize {
        self.swaps_made
    }

    /// Rejected pairs so far
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Whether `solved` is scheduled but not yet delivered
    pub fn solve_pending(&self) -> bool {
        self.solve_due.is_some()
    }

    /// Whether `solved` has been delivered
    pub fn solved_notified(&self) -> bool {
        self.solved_notified
    }

    /// Select the box at `position`.
    ///
    /// The first call of a pair only highlights it. The second resolves the
    /// pair against the next expected swap: on a match the boxes trade
    /// places, otherwise both are reported as mismatched. The selection is
    /// cleared either way.
    ///
    /// Out-of-range positions and any input after the puzzle is solved are
    /// ignored.
    pub fn select_position<R>(&mut self, position: usize, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        if self.is_solved() {
            trace!(position, "puzzle solved, ignoring selection");
            return;
        }
        if position >= self.arrangement.len() {
            debug!(position, len = self.arrangement.len(), "selection out of range");
            return;
        }

        renderer.highlighted(position);

        match self.selection.take() {
            None => self.selection = Some(position),
            Some(first) => self.resolve(first, position, renderer),
        }
    }

    fn resolve<R>(&mut self, first: usize, second: usize, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        let expected = self.trace.front().copied();
        match expected {
            Some(step) if step.matches(first, second) => {
                self.arrangement.swap(first, second);
                self.trace.pop_front();
                self.swaps_made += 1;
                debug!(first, second, remaining = self.trace.len(), "swap accepted");
                renderer.swapped(first, second, &self.arrangement);

                if self.trace.is_empty() {
                    let due = self.clock.now() + self.solve_delay;
                    info!(swaps = self.swaps_made, mismatches = self.mismatches, "puzzle solved");
                    self.solve_due = Some(due);
                }
            }
            _ => {
                self.mismatches += 1;
                debug!(first, second, ?expected, "swap rejected");
                renderer.mismatched(first, second);
            }
        }
    }

    /// Deliver the `solved` notification once its delay has passed.
    ///
    /// Returns `true` on the call that delivered it.
    pub fn poll<R>(&mut self, renderer: &mut R) -> bool
    where
        R: Renderer + ?Sized,
    {
        match self.solve_due {
            Some(due) if self.clock.now() >= due => {
                self.solve_due = None;
                self.solved_notified = true;
                renderer.solved();
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleState")
            .field("arrangement", &self.arrangement)
            .field("trace", &self.trace)
            .field("selection", &self.selection)
            .field("swaps_made", &self.swaps_made)
            .field("mismatches", &self.mismatches)
            .field("solve_due", &self.solve_due)
            .finish_non_exhaustive()
    }
}

fn is_permutation(values: &[u32]) -> bool {
    let mut seen = vec![false; values.len()];
    for &v in values {
        let Some(idx) = (v as usize).checked_sub(1) else {
            return false;
        };
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
