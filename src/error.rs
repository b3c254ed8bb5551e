// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Errors returned by segment tree construction and operations.

use crate::policy::Combination;
use crate::policy::Update;

/// The two families of failure a caller can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tree could not be configured as requested.
    Configuration,
    /// An operation was called with arguments outside its contract.
    Precondition,
}

/// Error returned by segment tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No apply/compose pair exists for this combination and update.
    #[error("unsupported policy: {combination} queries with {update} updates")]
    UnsupportedPolicy { combination: Combination, update: Update },

    /// A tree needs at least one element.
    #[error("segment tree values cannot be empty")]
    EmptyValues,

    /// A combination or update name did not parse.
    #[error("unknown {what} function: {name:?}")]
    UnknownName { what: &'static str, name: String },

    /// A position outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A range that is reversed or reaches past the end.
    #[error("invalid range [{l}, {r}] for length {len}")]
    InvalidRange { l: usize, r: usize, len: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedPolicy { .. } | Error::EmptyValues | Error::UnknownName { .. } => {
                ErrorKind::Configuration
            }
            Error::IndexOutOfBounds { .. } | Error::InvalidRange { .. } => ErrorKind::Precondition,
        }
    }
}

/// Check that `index` addresses an element of a sequence of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if index >= len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    return Ok(());
}

/// Check that `[l, r]` is a non-empty inclusive range inside `[0, len)`.
pub(crate) fn check_range(l: usize, r: usize, len: usize) -> Result<(), Error> {
    if l > r || r >= len {
        return Err(Error::InvalidRange { l, r, len });
    }
    return Ok(());
}
