//! Error types shared across the crate.

use thiserror::Error as ThisError;

/// Errors raised by model construction, parsing, and the solvers.
///
/// All failures are detected synchronously and reported to the immediate
/// caller; nothing is retried and no partially-built model escapes a failed
/// construction.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Label count does not match the matrix dimension.
    #[error("{points} point labels do not match matrix dimension {rows}")]
    InvalidShape { points: usize, rows: usize },
    /// A matrix row has the wrong number of entries.
    #[error("matrix row {row} has {width} entries, expected {size}")]
    RaggedMatrix {
        row: usize,
        width: usize,
        size: usize,
    },
    /// The model contains no points at all.
    #[error("model must contain at least one point")]
    DegenerateInput,
    /// Too many points for the exact solver's subset DP.
    #[error("{size} points exceed the exact solver limit of {max}")]
    SizeLimitExceeded { size: usize, max: usize },
    /// Heuristic start index outside `[0, N)`.
    #[error("start index {start} is out of range for {len} points")]
    InvalidStart { start: usize, len: usize },
    /// Malformed input text.
    #[error("invalid input format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }
}
