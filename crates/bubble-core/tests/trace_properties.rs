//! Property-based tests for the swap trace and the puzzle built on it.

use bubble_core::{
    apply_trace, compute_trace, EventLog, ManualClock, PuzzleConfig, PuzzleEvent, PuzzleState,
    SwapStep, SOLVE_DELAY,
};
use proptest::prelude::*;

// ============================================================================
//  Strategies
// ============================================================================

/// A permutation of 1..=n for n in 0..=max
fn permutation(max: usize) -> impl Strategy<Value = Vec<u32>> {
    (0..=max).prop_flat_map(|n| Just((1..=n as u32).collect::<Vec<_>>()).prop_shuffle())
}

/// Clicks that may or may not be in range, including repeats
fn clicks(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..=max_len)
}

fn new_puzzle(arrangement: &[u32]) -> (PuzzleState, ManualClock) {
    let clock = ManualClock::new();
    let state = PuzzleState::from_arrangement(arrangement.to_vec(), PuzzleConfig::default(), clock.clone())
        .expect("strategy yields permutations");
    (state, clock)
}

proptest! {
    /// Replaying the trace sorts the input.
    #[test]
    fn trace_sorts(perm in permutation(10)) {
        let mut seq = perm.clone();
        apply_trace(&mut seq, &compute_trace(&perm));
        let sorted: Vec<u32> = (1..=perm.len() as u32).collect();
        prop_assert_eq!(seq, sorted);
    }

    /// Same input, same trace.
    #[test]
    fn trace_is_deterministic(perm in permutation(10)) {
        prop_assert_eq!(compute_trace(&perm), compute_trace(&perm));
    }

    /// One swap per inversion, every step adjacent and in range.
    #[test]
    fn trace_steps_are_adjacent_inversions(perm in permutation(10)) {
        let trace = compute_trace(&perm);
        let inversions = (0..perm.len())
            .flat_map(|i| (i + 1..perm.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| perm[i] > perm[j])
            .count();
        prop_assert_eq!(trace.len(), inversions);
        for step in &trace {
            prop_assert!(step.right() < perm.len());
            prop_assert_eq!(step.right(), step.left() + 1);
        }
    }

    /// Following the trace click by click solves the puzzle.
    #[test]
    fn following_trace_solves(perm in permutation(9)) {
        let (mut state, clock) = new_puzzle(&perm);
        let trace: Vec<SwapStep> = compute_trace(&perm);
        let mut log = EventLog::new();

        for step in &trace {
            state.select_position(step.right(), &mut log);
            state.select_position(step.left(), &mut log);
        }

        prop_assert!(state.is_solved());
        prop_assert_eq!(state.swaps_made(), trace.len());
        prop_assert_eq!(state.mismatches(), 0);
        let sorted: Vec<u32> = (1..=perm.len() as u32).collect();
        prop_assert_eq!(state.arrangement(), &sorted[..]);

        clock.advance(SOLVE_DELAY);
        let delivered = state.poll(&mut log);
        prop_assert_eq!(delivered, !trace.is_empty());
    }

    /// The remaining trace shrinks by exactly one per swap and never on a mismatch.
    #[test]
    fn trace_shrinks_only_on_swap(perm in permutation(8), clicks in clicks(40)) {
        let (mut state, _clock) = new_puzzle(&perm);

        for position in clicks {
            let before = state.remaining_swaps();
            let arrangement_before = state.arrangement().to_vec();
            let mut log = EventLog::new();
            state.select_position(position, &mut log);

            let mut expected_after = before;
            for event in log.events() {
                match event {
                    PuzzleEvent::Swapped { arrangement, .. } => {
                        expected_after -= 1;
                        prop_assert_eq!(arrangement, &state.arrangement().to_vec());
                    }
                    PuzzleEvent::Mismatched { .. } => {
                        prop_assert_eq!(state.arrangement(), &arrangement_before[..]);
                    }
                    _ => {}
                }
            }
            prop_assert_eq!(state.remaining_swaps(), expected_after);

            // The row is always a permutation
            let mut sorted = state.arrangement().to_vec();
            sorted.sort_unstable();
            prop_assert!(sorted.iter().copied().eq(1..=perm.len() as u32));
        }
    }

    /// Clicking the same box twice never swaps.
    #[test]
    fn self_click_never_swaps(perm in permutation(8), position in 0usize..8) {
        let (mut state, _clock) = new_puzzle(&perm);
        prop_assume!(!state.is_solved() && position < state.len());

        let mut log = EventLog::new();
        state.select_position(position, &mut log);
        state.select_position(position, &mut log);

        prop_assert_eq!(
            log.events().last(),
            Some(&PuzzleEvent::Mismatched { first: position, second: position })
        );
        let any_swapped = log.events().iter().any(|e| matches!(e, PuzzleEvent::Swapped { .. }));
        prop_assert!(!any_swapped);
    }

    /// Once solved, clicks change nothing and report nothing.
    #[test]
    fn solved_is_absorbing(perm in permutation(7), clicks in clicks(20)) {
        let (mut state, _clock) = new_puzzle(&perm);
        let mut log = EventLog::new();
        for step in compute_trace(&perm) {
            state.select_position(step.left(), &mut log);
            state.select_position(step.right(), &mut log);
        }
        prop_assert!(state.is_solved());
        log.drain();

        for position in clicks {
            state.select_position(position, &mut log);
        }
        prop_assert!(log.is_empty());
        prop_assert_eq!(state.selection(), None);
        prop_assert_eq!(state.remaining_swaps(), 0);
    }
}
