//! The boxed 64-bit integer operator suite.
//!
//! Every operator the host runtime dispatches on the boxed `int64`
//! type, expressed as a pure function over typed operands plus the run
//! context (`&mut Arena`). The host's operand-stack convention is
//! abstracted away; what remains is each operator's contract, including
//! which operand references it consumes.
//!
//! Reference conventions follow the runtime's dispatch rules:
//!
//! - Arithmetic operators mutate the left/receiving operand in place
//!   and release the right operand's reference.
//! - Constructors and coercions (`clone_of`, `as_int`, comparisons, the
//!   copy-policy entry points) do not consume their source references;
//!   the host releases those itself.
//! - Operators producing a plain (unboxed) result release the boxed
//!   operands they consumed.
//!
//! Overflow on add/multiply is explicit two's-complement wraparound
//! (`wrapping_*`); division by zero completes with a sentinel carried
//! by [`Computed`] rather than aborting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arith;
pub mod binary;
pub mod compare;
pub mod convert;
pub mod copy;
pub mod divide;
pub mod error;
pub mod outcome;
pub mod text;

pub use error::ValueError;
pub use outcome::Computed;

use ingot_arena::Arena;
use ingot_core::{Int64Handle, Operand};

/// Fail with [`ValueError::ConstantModified`] if the box is constant.
///
/// Reports through the arena's sink first, matching the hard-error
/// propagation policy: the message goes out before the error code.
pub(crate) fn ensure_mutable(arena: &mut Arena, handle: Int64Handle) -> Result<(), ValueError> {
    if arena.is_constant(handle) {
        arena.report("int64: attempt to modify a constant");
        return Err(ValueError::ConstantModified);
    }
    Ok(())
}

/// Resolve a mutation target, failing on the null operand.
pub(crate) fn require_target(
    arena: &mut Arena,
    target: Operand,
) -> Result<Int64Handle, ValueError> {
    match target {
        Some(handle) => Ok(handle),
        None => {
            arena.report("int64: access to an uninitialized value");
            Err(ValueError::Uninitialized)
        }
    }
}
