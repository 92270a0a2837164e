// Error types for word encoding and mask computation.
//
// Every operation either fully succeeds or fails with one of these. Nothing
// is retried or partially applied.

/// Errors returned by the encoding and comparison functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A word contains a character the alphabet doesn't list.
    #[error("character {character:?} in word {word:?} is not in the alphabet")]
    UnknownSymbol { character: char, word: String },

    /// Encoding needs at least one word to size the position axis.
    #[error("cannot encode an empty word list")]
    EmptyWordList,

    /// A maximum word length of zero was requested.
    #[error("max_len must be a positive integer")]
    InvalidMaxLen,

    /// Two tensors (or a tensor and its word list) disagree on a dimension.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, Error>;
