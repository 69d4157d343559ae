//! Error types.
use std::path::PathBuf;
use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching the block definitions from the network failed.
    #[error("failed to retrieve {url}: {reason}")]
    Retrieval { url: String, reason: String },

    /// A line in the block definitions could not be parsed.
    /// `line` is 1-based.
    #[error("line {line}: {reason}: {text:?}")]
    Parse {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("block {index} out of range; valid blocks are 1..={count}")]
    BlockOutOfRange { index: usize, count: usize },

    /// The value is a surrogate or lies beyond U+10FFFF and so
    /// has no standalone encoding.
    #[error("{0:#x} is not a valid unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("{input:?} is not a hexadecimal code point: {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
