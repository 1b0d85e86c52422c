//! Hard errors from the boxed-integer operator suite.
//!
//! Hard errors abort the operation and leave the destination unchanged.
//! Division by zero is deliberately *not* here: it completes with a
//! sentinel result and is carried by [`crate::Computed`] instead.

use std::error::Error;
use std::fmt;

use ingot_arena::ArenaError;

/// An operation was aborted; state is unchanged where applicable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// An in-place mutation targeted a box created as a constant.
    ConstantModified,
    /// A mutation targeted the null operand (an uninitialized box).
    Uninitialized,
    /// Text parsing consumed no digit before stopping.
    MalformedText {
        /// Bytes consumed before the parse gave up.
        consumed: usize,
    },
    /// Binary parsing received an input of the wrong length.
    WrongBinaryLength {
        /// Required length of the wire form, in bytes.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
    /// Allocating a result box failed in the arena.
    Arena(ArenaError),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantModified => write!(f, "attempt to modify a constant"),
            Self::Uninitialized => write!(f, "access to an uninitialized value"),
            Self::MalformedText { consumed } => {
                write!(f, "malformed integer literal after {consumed} bytes")
            }
            Self::WrongBinaryLength { expected, got } => {
                write!(f, "binary image must be {expected} bytes, got {got}")
            }
            Self::Arena(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ValueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ValueError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
