//! JSON snapshot storage for the roster.
//!
//! # Responsibility
//! - Own the persisted file format and its read/write entry points.
//! - Keep file I/O and serialization details inside the core persistence
//!   boundary.
//!
//! # Invariants
//! - The whole roster is rewritten on every save; there is no append path.
//! - A missing snapshot file loads as an empty roster, not an error.
//!
//! # See also
//! - docs/architecture/persistence.md

use std::error::Error;
use std::fmt::{Display, Formatter};

mod snapshot;

pub use snapshot::{load_roster, save_roster};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure while reading or writing the snapshot file.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot file i/o failed: {err}"),
            Self::Json(err) => write!(f, "snapshot document is not valid: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
