//! Error types for sequence operations.
//!
//! All errors are caller-contract violations or configured limits. Nothing
//! here is retried or recovered internally; the error surfaces at the call
//! that caused it.

use thiserror::Error;

/// Errors raised by sequences and their helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `next()` was called while `has_next()` was false.
    #[error("sequence is exhausted")]
    Exhausted,

    /// A value was forcibly unwrapped from `None`.
    #[error("called unwrap on a None value")]
    UnwrapOnNone,

    /// Materializing the sequence would buffer more than `limit` elements.
    #[error("buffer limit exceeded: more than {limit} element(s)")]
    BufferLimit { limit: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
