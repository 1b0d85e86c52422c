//! Construction and coercion entry points.
//!
//! Constructors allocate a fresh box in the run context; coercions read
//! an operand out into the host's plain types. None of these consume
//! the source operand's reference; the host releases constructor and
//! coercion arguments itself.

use ingot_arena::Arena;
use ingot_core::{Int64Handle, Operand};

use crate::ValueError;

/// Create a fresh mutable box holding 0.
///
/// Also the identity element handed to summation folds.
pub fn create(arena: &mut Arena) -> Result<Int64Handle, ValueError> {
    Ok(arena.allocate()?)
}

/// Create a box holding 1, the identity element for product folds.
pub fn one(arena: &mut Arena) -> Result<Int64Handle, ValueError> {
    let handle = arena.allocate()?;
    arena.set_value(handle, 1);
    Ok(handle)
}

/// Create a box from the host's plain integer.
pub fn from_int(arena: &mut Arena, value: i32) -> Result<Int64Handle, ValueError> {
    let handle = arena.allocate()?;
    arena.set_value(handle, i64::from(value));
    Ok(handle)
}

/// Create a box from the host's plain real, truncating toward zero.
pub fn from_real(arena: &mut Arena, value: f64) -> Result<Int64Handle, ValueError> {
    let handle = arena.allocate()?;
    arena.set_value(handle, value as i64);
    Ok(handle)
}

/// Create a fresh *mutable* box copying the source value (`None` = 0).
pub fn clone_of(arena: &mut Arena, source: Operand) -> Result<Int64Handle, ValueError> {
    let value = arena.value(source);
    let handle = arena.allocate()?;
    arena.set_value(handle, value);
    Ok(handle)
}

/// Create a *constant* box copying the source value (`None` = 0).
///
/// The new box rejects every in-place mutation for its whole lifetime.
pub fn constant_copy(arena: &mut Arena, source: Operand) -> Result<Int64Handle, ValueError> {
    Ok(arena.allocate_constant_copy(source)?)
}

/// Create a box holding the maximum representable value.
pub fn max_value(arena: &mut Arena) -> Result<Int64Handle, ValueError> {
    let handle = arena.allocate()?;
    arena.set_value(handle, i64::MAX);
    Ok(handle)
}

/// Create a box holding the minimum representable value.
///
/// Used directly by the host and as the negative sentinel of the
/// saturating division paths.
pub fn min_value(arena: &mut Arena) -> Result<Int64Handle, ValueError> {
    let handle = arena.allocate()?;
    arena.set_value(handle, i64::MIN);
    Ok(handle)
}

/// Coerce to the host's plain integer, truncating to 32 bits.
pub fn as_int(arena: &Arena, source: Operand) -> i32 {
    arena.value(source) as i32
}

/// Coerce to the host's plain real.
pub fn as_real(arena: &Arena, source: Operand) -> f64 {
    arena.value(source) as f64
}

/// Create a box holding the absolute value of the source.
///
/// `i64::MIN` has no positive counterpart and wraps to itself, the
/// two's-complement behavior of the operators generally.
pub fn abs(arena: &mut Arena, source: Operand) -> Result<Int64Handle, ValueError> {
    let value = arena.value(source).wrapping_abs();
    let handle = arena.allocate()?;
    arena.set_value(handle, value);
    Ok(handle)
}

/// Whether the value is odd; the null operand is even.
pub fn is_odd(arena: &Arena, source: Operand) -> bool {
    arena.value(source) % 2 != 0
}
