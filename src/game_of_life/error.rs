//! Error types for board construction, mutation and persistence

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Everything that can go wrong while working with a [`Board`](super::Board).
///
/// None of these are fatal inside the library: the board is left exactly as
/// it was before the failing call.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to allocate a {height}x{width} board")]
    Allocation { height: usize, width: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown preset '{0}'")]
    PresetNotFound(String),

    #[error(
        "dimension mismatch: board is {}x{}, file is {}x{}",
        .expected.0, .expected.1, .found.0, .found.1
    )]
    DimensionMismatch {
        /// (height, width) of the board being written to
        expected: (usize, usize),
        /// (height, width) read from the input
        found: (usize, usize),
    },

    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("malformed board data: {message}")]
    Parse { message: String },

    #[error("invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        BoardError::Parse {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BoardError::Io {
            path: path.into(),
            source,
        }
    }
}
