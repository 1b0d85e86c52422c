//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Growing the slot store failed because the underlying allocation
    /// failed. Existing slots and handles are untouched.
    AllocationFailed {
        /// Number of slots the failed growth step asked for.
        requested_slots: usize,
        /// Capacity at the time of the failure, in slots.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                requested_slots,
                capacity,
            } => {
                write!(
                    f,
                    "slot store allocation failed: requested {requested_slots} slots at capacity {capacity}"
                )
            }
        }
    }
}

impl Error for ArenaError {}
