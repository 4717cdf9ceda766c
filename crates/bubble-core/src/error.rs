use thiserror::Error;

/// Reasons a puzzle cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Requested element count is negative
    #[error("invalid puzzle size {requested}: expected a non-negative count")]
    InvalidSize { requested: i64 },
    /// A supplied arrangement is not a permutation of 1..=N
    #[error("arrangement {arrangement:?} is not a permutation of 1..={}", .arrangement.len())]
    InvalidArrangement { arrangement: Vec<u32> },
}
