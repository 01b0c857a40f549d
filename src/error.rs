// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! Errors surfaced by list operations.
//!
//! Every variant is a contract violation reported synchronously at the
//! offending call. Nothing is retried or clamped, and a failed bounds
//! check never leaves the container partially mutated: operations
//! validate first and mutate only after every check passes.

use thiserror::Error;

/// Errors returned by adaptive list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index or range endpoint outside the valid bounds.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A range whose start lies past its end.
    #[error("illegal range: from {from} is greater than to {to}")]
    IllegalRange { from: usize, to: usize },

    /// A mutating call on an unmodifiable list.
    #[error("unsupported operation `{0}` on an unmodifiable list")]
    UnsupportedOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, ListError>;
