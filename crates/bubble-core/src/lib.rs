//! Bubble sort swap puzzle engine
//!
//! This crate computes the exact sequence of adjacent swaps a textbook
//! bubble sort performs, and runs the two-click puzzle where a player has to
//! reproduce that sequence one swap at a time.
//!
//! The engine is presentation-agnostic: front ends feed it box selections and
//! receive outcomes through the [`Renderer`] trait.
//!
//! ```
//! use bubble_core::{compute_trace, EventLog, ManualClock, PuzzleConfig, PuzzleEvent, PuzzleState};
//!
//! let trace = compute_trace(&[3, 1, 2]);
//! assert_eq!(trace.len(), 2);
//!
//! let clock = ManualClock::new();
//! let mut puzzle =
//!     PuzzleState::from_arrangement(vec![3, 1, 2], PuzzleConfig::default(), clock.clone())
//!         .unwrap();
//! let mut log = EventLog::new();
//! puzzle.select_position(0, &mut log);
//! puzzle.select_position(1, &mut log);
//! assert_eq!(puzzle.arrangement(), &[1, 3, 2]);
//! assert!(log.events().contains(&PuzzleEvent::Swapped {
//!     first: 0,
//!     second: 1,
//!     arrangement: vec![1, 3, 2],
//! }));
//! ```

pub mod clock;
pub mod error;
pub mod puzzle;
pub mod renderer;
pub mod shuffle;
pub mod trace;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::PuzzleError;
pub use puzzle::{Phase, PuzzleConfig, PuzzleState, DEFAULT_SIZE, SOLVE_DELAY};
pub use renderer::{EventLog, PuzzleEvent, Renderer};
pub use shuffle::{FixedShuffler, RandomShuffler, Shuffler};
pub use trace::{apply_trace, compute_trace, SwapStep};
