//! Outcome notifications from the puzzle to whatever draws it

use serde::{Deserialize, Serialize};

/// Receives the outcome of every accepted selection.
///
/// Calls arrive synchronously from [`crate::PuzzleState::select_position`],
/// except `solved`, which arrives from [`crate::PuzzleState::poll`] once the
/// solve delay has passed.
pub trait Renderer {
    /// A box was added to the pending selection
    fn highlighted(&mut self, position: usize);

    /// The two boxes were swapped; `arrangement` is the layout afterwards
    fn swapped(&mut self, first: usize, second: usize, arrangement: &[u32]);

    /// The pair was not the swap bubble sort makes next
    fn mismatched(&mut self, first: usize, second: usize);

    /// The last swap has settled and the row is sorted
    fn solved(&mut self);
}

/// A single renderer notification, as data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleEvent {
    Highlighted {
        position: usize,
    },
    Swapped {
        first: usize,
        second: usize,
        arrangement: Vec<u32>,
    },
    Mismatched {
        first: usize,
        second: usize,
    },
    Solved,
}

/// Records every notification in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PuzzleEvent>,
    /// Most events kept; the oldest are dropped past this
    limit: Option<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that keeps only the newest `limit` events
    pub fn bounded(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit: Some(limit),
        }
    }

    fn push(&mut self, event: PuzzleEvent) {
        self.events.push(event);
        if let Some(limit) = self.limit {
            if self.events.len() > limit {
                let excess = self.events.len() - limit;
                self.events.drain(..excess);
            }
        }
    }

    pub fn events(&self) -> &[PuzzleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take everything recorded so far, leaving the log empty
    pub fn drain(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Renderer for EventLog {
    fn highlighted(&mut self, position: usize) {
        self.push(PuzzleEvent::Highlighted { position });
    }

    fn swapped(&mut self, first: usize, second: usize, arrangement: &[u32]) {
        self.push(PuzzleEvent::Swapped {
            first,
            second,
            arrangement: arrangement.to_vec(),
        });
    }

    fn mismatched(&mut self, first: usize, second: usize) {
        self.push(PuzzleEvent::Mismatched { first, second });
    }

    fn solved(&mut self) {
        self.push(PuzzleEvent::Solved);
    }
}
