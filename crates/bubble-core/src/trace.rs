//! The canonical bubble sort swap trace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One adjacent swap `(left, left + 1)` of the canonical trace.
///
/// Only the left index is stored, so a step can never describe a
/// non-adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SwapStep {
    left: usize,
}

impl SwapStep {
    /// Create the step swapping `left` and `left + 1`
    pub const fn new(left: usize) -> Self {
        Self { left }
    }

    /// Normalize an unordered pair of positions into a step.
    ///
    /// Returns `None` unless the two positions are adjacent.
    pub fn from_pair(a: usize, b: usize) -> Option<Self> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        (hi == lo + 1).then_some(Self { left: lo })
    }

    /// The lower position of the pair
    pub fn left(&self) -> usize {
        self.left
    }

    /// The higher position of the pair
    pub fn right(&self) -> usize {
        self.left + 1
    }

    /// Both positions, lower first
    pub fn positions(&self) -> (usize, usize) {
        (self.left, self.left + 1)
    }

    /// Whether the unordered pair `(a, b)` is exactly this step
    pub fn matches(&self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        lo == self.left && hi == self.left + 1
    }
}

impl fmt::Display for SwapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.left + 1)
    }
}

/// Compute the swaps a full nested-loop bubble sort performs on `sequence`.
///
/// Every outer pass runs, even once a pass makes no swap, and each pass
/// shrinks the inner bound by one. A step is recorded with the positions
/// being compared at that moment. Ties never swap.
///
/// The caller's slice is left untouched.
pub fn compute_trace<T: PartialOrd + Clone>(sequence: &[T]) -> Vec<SwapStep> {
    let mut work = sequence.to_vec();
    let n = work.len();
    let mut steps = Vec::new();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if work[j] > work[j + 1] {
                steps.push(SwapStep::new(j));
                work.swap(j, j + 1);
            }
        }
    }

    steps
}

/// Apply `steps` in order as literal adjacent swaps.
///
/// Steps reaching past the end of `sequence` are skipped.
pub fn apply_trace<T>(sequence: &mut [T], steps: &[SwapStep]) {
    for step in steps {
        if step.right() < sequence.len() {
            sequence.swap(step.left(), step.right());
        }
    }
}
