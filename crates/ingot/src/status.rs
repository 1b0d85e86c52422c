//! Host-facing status codes.
//!
//! The host dispatch layer works in integer status codes rather than
//! Rust error types: `Ok` continues execution, `Error` aborts the
//! current operation, and `MathError` signals that a division-family
//! operation completed with its documented sentinel and execution may
//! continue. Conversions from the typed errors are provided here.

use ingot_arena::ArenaError;
use ingot_value::{Computed, ValueError};

/// Status code returned to the host for every entry point.
///
/// `Ok` = 0; failure codes are negative. Values are stable: the host
/// persists them in traces.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The operation completed normally.
    Ok = 0,
    /// Hard error: the operation aborted, state unchanged where
    /// applicable.
    Error = -1,
    /// Non-fatal math error: the result is the documented sentinel and
    /// execution may continue.
    MathError = -2,
}

impl Status {
    /// Collapse a fallible division-family result into a status code.
    pub fn of<T>(result: &Result<Computed<T>, ValueError>) -> Self {
        match result {
            Ok(outcome) => Self::from(outcome),
            Err(e) => Self::from(e),
        }
    }
}

impl<T> From<&Computed<T>> for Status {
    fn from(outcome: &Computed<T>) -> Self {
        if outcome.is_math_error() {
            Self::MathError
        } else {
            Self::Ok
        }
    }
}

impl From<&ValueError> for Status {
    fn from(_: &ValueError) -> Self {
        Self::Error
    }
}

impl From<&ArenaError> for Status {
    fn from(_: &ArenaError) -> Self {
        Self::Error
    }
}
