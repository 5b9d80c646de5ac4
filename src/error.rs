use std::fmt;
use std::io;

/// Error type for the internal key codec.
///
/// Only *data* problems show up here. A broken caller (sequence overflow,
/// user key extraction on a truncated buffer) panics instead.
#[derive(Debug)]
pub enum Error {
    /// IO error while writing a key to a sink.
    Io(io::Error),
    /// Malformed key bytes (too short, unknown value type, etc).
    Corruption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::Corruption(msg) => write!(f, "Corruption: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Corruption(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
