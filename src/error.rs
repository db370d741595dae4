use crate::text::in_quotes;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The pattern (or a range inside it) is not well formed.
    Syntax,
    /// A quantifier was given counts it cannot express.
    InvalidArgument,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("One or more groups were opened but never closed: {}", in_quotes(.pattern))]
    UnclosedGroup { pattern: String },
    #[error("Illegal character class range: {}", in_quotes(.range))]
    IllegalRange { range: String },
    #[error("Out of order character class range near index {index}: {}", in_quotes(.range))]
    OutOfOrderRange { range: String, index: usize },
    #[error("A times number must be positive, got {0}")]
    NegativeCount(i32),
    #[error("to ({to}) must be bigger than from ({from})")]
    InvertedBounds { from: i32, to: i32 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnclosedGroup { .. }
            | Error::IllegalRange { .. }
            | Error::OutOfOrderRange { .. } => ErrorKind::Syntax,
            Error::NegativeCount(_) | Error::InvertedBounds { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
