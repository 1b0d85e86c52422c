//! Assignment, addition, negation, and multiplication.
//!
//! These operators mutate the left/receiving operand's slot in place
//! and release the right operand's reference; the null operand behaves
//! as 0 (for multiplication, a null factor zeroes the product). On a
//! hard error no operand reference is consumed and no slot is written.

use ingot_arena::Arena;
use ingot_core::{Int64Handle, Operand};

use crate::{convert, ensure_mutable, require_target, ValueError};

/// Assignment `target := source`.
///
/// Copies the source value (`None` = 0) into the target in place and
/// releases the source's reference. Fails on a null target
/// ([`ValueError::Uninitialized`]) or a constant target
/// ([`ValueError::ConstantModified`]).
pub fn assign(arena: &mut Arena, target: Operand, source: Operand) -> Result<(), ValueError> {
    let target = require_target(arena, target)?;
    ensure_mutable(arena, target)?;
    let value = arena.value(source);
    arena.set_value(target, value);
    arena.release_operand(source);
    Ok(())
}

/// Assignment `target := value` from the host's plain integer.
pub fn assign_int(arena: &mut Arena, target: Operand, value: i32) -> Result<(), ValueError> {
    let target = require_target(arena, target)?;
    ensure_mutable(arena, target)?;
    arena.set_value(target, i64::from(value));
    Ok(())
}

/// Addition `lhs + rhs`, accumulating into `lhs`.
///
/// Releases `rhs`; a null `lhs` passes `rhs` through unchanged.
/// Wraps on overflow.
pub fn add(arena: &mut Arena, lhs: Operand, rhs: Operand) -> Result<Operand, ValueError> {
    match lhs {
        Some(l) => {
            ensure_mutable(arena, l)?;
            if let Some(r) = rhs {
                let sum = arena.value(Some(l)).wrapping_add(arena.value(Some(r)));
                arena.set_value(l, sum);
                arena.release(r);
            }
            Ok(Some(l))
        }
        None => Ok(rhs),
    }
}

/// Addition `lhs + value` with the host's plain integer.
///
/// A null `lhs` allocates a fresh box holding `value`.
pub fn add_int(arena: &mut Arena, lhs: Operand, value: i32) -> Result<Int64Handle, ValueError> {
    match lhs {
        Some(l) => {
            ensure_mutable(arena, l)?;
            let sum = arena.value(Some(l)).wrapping_add(i64::from(value));
            arena.set_value(l, sum);
            Ok(l)
        }
        None => convert::from_int(arena, value),
    }
}

/// Addition `lhs + value` with the host's plain real; the result is
/// plain, so `lhs` is released.
pub fn add_real(arena: &mut Arena, lhs: Operand, value: f64) -> f64 {
    match lhs {
        Some(l) => {
            let sum = arena.value(Some(l)) as f64 + value;
            arena.release(l);
            sum
        }
        None => value,
    }
}

/// Sign change in place; the null operand passes through.
pub fn negate(arena: &mut Arena, operand: Operand) -> Result<Operand, ValueError> {
    if let Some(h) = operand {
        ensure_mutable(arena, h)?;
        let value = arena.value(Some(h)).wrapping_neg();
        arena.set_value(h, value);
    }
    Ok(operand)
}

/// Product `lhs * rhs`, accumulating into `lhs`.
///
/// Releases `rhs`. A null factor makes the product 0: a null `rhs`
/// zeroes `lhs` in place, and a null `lhs` stays null (which already
/// reads as 0). Wraps on overflow.
pub fn mul(arena: &mut Arena, lhs: Operand, rhs: Operand) -> Result<Operand, ValueError> {
    match lhs {
        Some(l) => {
            ensure_mutable(arena, l)?;
            match rhs {
                Some(r) => {
                    let product = arena.value(Some(l)).wrapping_mul(arena.value(Some(r)));
                    arena.set_value(l, product);
                    arena.release(r);
                }
                None => arena.set_value(l, 0),
            }
            Ok(Some(l))
        }
        None => {
            arena.release_operand(rhs);
            Ok(None)
        }
    }
}

/// Product `lhs * value` with the host's plain integer.
pub fn mul_int(arena: &mut Arena, lhs: Operand, value: i32) -> Result<Operand, ValueError> {
    if let Some(l) = lhs {
        ensure_mutable(arena, l)?;
        let product = arena.value(Some(l)).wrapping_mul(i64::from(value));
        arena.set_value(l, product);
    }
    Ok(lhs)
}

/// Product `lhs * value` with the host's plain real; the result is
/// plain, so `lhs` is released. A null `lhs` yields 0.
pub fn mul_real(arena: &mut Arena, lhs: Operand, value: f64) -> f64 {
    match lhs {
        Some(l) => {
            let product = arena.value(Some(l)) as f64 * value;
            arena.release(l);
            product
        }
        None => 0.0,
    }
}
