use crate::PermIndex;

/// Errors reported while building or querying a [`PermutationTree`](crate::PermutationTree).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The permutation count of the input does not fit the configured limit.
    #[error("{count} symbols exceeds the limit of {max} symbols")]
    TooManySymbols { count: usize, max: usize },

    /// Two input positions hold the same symbol and duplicates are rejected.
    #[error("symbol at position {second} duplicates the symbol at position {first}")]
    DuplicateSymbol { first: usize, second: usize },

    /// A 1-based permutation index outside `1..=total`.
    #[error("permutation index {num} is outside 1..={total}")]
    IndexOutOfRange { num: PermIndex, total: PermIndex },
}
