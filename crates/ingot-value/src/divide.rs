//! Division and modulo, with sentinel results on a zero divisor.
//!
//! True division always produces the host's plain real; a zero divisor
//! yields signed infinity matching the dividend's sign. Integer
//! division and modulo keep the result boxed (mutating the dividend's
//! slot) and saturate to the extreme of the representable range on a
//! zero divisor; the plain-result variants saturate to the host's
//! plain-integer bounds. Every zero-divisor path reports through the
//! diagnostic sink and completes with [`Computed::DividedByZero`] so a
//! batch computation is not aborted by a single bad divisor.

use ingot_arena::Arena;
use ingot_core::Operand;

use crate::{ensure_mutable, Computed, ValueError};

/// Whether the operand holds a negative value (`None` reads as 0).
fn is_negative(arena: &Arena, operand: Operand) -> bool {
    arena.value(operand) < 0
}

fn signed_infinity(negative: bool) -> f64 {
    if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// The saturated stand-in for `dividend / 0` in the boxed range.
fn saturate(dividend: i64) -> i64 {
    if dividend < 0 {
        i64::MIN
    } else {
        i64::MAX
    }
}

fn report_zero_divisor(arena: &mut Arena) {
    arena.report("int64: division by zero");
}

/// True division `lhs / rhs`; both references are released.
///
/// A zero (or null) divisor yields ±∞ matching the dividend's sign.
pub fn div(arena: &mut Arena, lhs: Operand, rhs: Operand) -> Computed<f64> {
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        let infinity = signed_infinity(is_negative(arena, lhs));
        arena.release_operand(lhs);
        arena.release_operand(rhs);
        return Computed::DividedByZero(infinity);
    }
    let quotient = arena.value(lhs) as f64 / arena.value(rhs) as f64;
    arena.release_operand(lhs);
    arena.release_operand(rhs);
    Computed::Exact(quotient)
}

/// True division `lhs / divisor` by the host's plain integer.
pub fn div_int(arena: &mut Arena, lhs: Operand, divisor: i32) -> Computed<f64> {
    if divisor == 0 {
        report_zero_divisor(arena);
        let infinity = signed_infinity(is_negative(arena, lhs));
        arena.release_operand(lhs);
        return Computed::DividedByZero(infinity);
    }
    let quotient = arena.value(lhs) as f64 / f64::from(divisor);
    arena.release_operand(lhs);
    Computed::Exact(quotient)
}

/// True division `dividend / rhs` of the host's plain integer.
pub fn int_div(arena: &mut Arena, dividend: i32, rhs: Operand) -> Computed<f64> {
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        arena.release_operand(rhs);
        return Computed::DividedByZero(signed_infinity(dividend < 0));
    }
    let quotient = f64::from(dividend) / arena.value(rhs) as f64;
    arena.release_operand(rhs);
    Computed::Exact(quotient)
}

/// True division `lhs / divisor` by the host's plain real.
pub fn div_real(arena: &mut Arena, lhs: Operand, divisor: f64) -> Computed<f64> {
    if divisor == 0.0 {
        report_zero_divisor(arena);
        let infinity = signed_infinity(is_negative(arena, lhs));
        arena.release_operand(lhs);
        return Computed::DividedByZero(infinity);
    }
    let quotient = arena.value(lhs) as f64 / divisor;
    arena.release_operand(lhs);
    Computed::Exact(quotient)
}

/// True division `dividend / rhs` of the host's plain real.
pub fn real_div(arena: &mut Arena, dividend: f64, rhs: Operand) -> Computed<f64> {
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        arena.release_operand(rhs);
        return Computed::DividedByZero(signed_infinity(dividend < 0.0));
    }
    let quotient = dividend / arena.value(rhs) as f64;
    arena.release_operand(rhs);
    Computed::Exact(quotient)
}

/// Integer division `lhs div rhs`, truncating toward zero.
///
/// Mutates the dividend's slot and releases `rhs`. A zero (or null)
/// divisor saturates the result to `i64::MAX` for a non-negative
/// dividend and `i64::MIN` otherwise, allocating a fresh box when the
/// dividend is null. `i64::MIN div -1` wraps.
pub fn idiv(arena: &mut Arena, lhs: Operand, rhs: Operand) -> Result<Computed<Operand>, ValueError> {
    if let Some(l) = lhs {
        ensure_mutable(arena, l)?;
    }
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        arena.release_operand(rhs);
        let target = match lhs {
            Some(l) => l,
            None => arena.allocate()?,
        };
        let sentinel = saturate(arena.value(Some(target)));
        arena.set_value(target, sentinel);
        return Ok(Computed::DividedByZero(Some(target)));
    }
    if let Some(l) = lhs {
        let quotient = arena.value(Some(l)).wrapping_div(arena.value(rhs));
        arena.set_value(l, quotient);
    }
    arena.release_operand(rhs);
    Ok(Computed::Exact(lhs))
}

/// Integer division `lhs div divisor` by the host's plain integer.
pub fn idiv_int(
    arena: &mut Arena,
    lhs: Operand,
    divisor: i32,
) -> Result<Computed<Operand>, ValueError> {
    if let Some(l) = lhs {
        ensure_mutable(arena, l)?;
    }
    if divisor == 0 {
        report_zero_divisor(arena);
        let target = match lhs {
            Some(l) => l,
            None => arena.allocate()?,
        };
        let sentinel = saturate(arena.value(Some(target)));
        arena.set_value(target, sentinel);
        return Ok(Computed::DividedByZero(Some(target)));
    }
    if let Some(l) = lhs {
        let quotient = arena.value(Some(l)).wrapping_div(i64::from(divisor));
        arena.set_value(l, quotient);
    }
    Ok(Computed::Exact(lhs))
}

/// Integer division `dividend div rhs` with a plain-integer result.
///
/// Releases `rhs`; a zero (or null) divisor saturates to the host's
/// plain-integer bounds by the dividend's sign.
pub fn int_idiv(arena: &mut Arena, dividend: i32, rhs: Operand) -> Computed<i32> {
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        arena.release_operand(rhs);
        let sentinel = if dividend < 0 { i32::MIN } else { i32::MAX };
        return Computed::DividedByZero(sentinel);
    }
    let quotient = i64::from(dividend).wrapping_div(arena.value(rhs)) as i32;
    arena.release_operand(rhs);
    Computed::Exact(quotient)
}

/// Modulo `lhs mod rhs`; same slot reuse, release, and zero-divisor
/// saturation as [`idiv`]. The result takes the dividend's sign.
pub fn imod(arena: &mut Arena, lhs: Operand, rhs: Operand) -> Result<Computed<Operand>, ValueError> {
    if let Some(l) = lhs {
        ensure_mutable(arena, l)?;
    }
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        arena.release_operand(rhs);
        let target = match lhs {
            Some(l) => l,
            None => arena.allocate()?,
        };
        let sentinel = saturate(arena.value(Some(target)));
        arena.set_value(target, sentinel);
        return Ok(Computed::DividedByZero(Some(target)));
    }
    if let Some(l) = lhs {
        let remainder = arena.value(Some(l)).wrapping_rem(arena.value(rhs));
        arena.set_value(l, remainder);
    }
    arena.release_operand(rhs);
    Ok(Computed::Exact(lhs))
}

/// Modulo `lhs mod divisor` by the host's plain integer.
pub fn imod_int(
    arena: &mut Arena,
    lhs: Operand,
    divisor: i32,
) -> Result<Computed<Operand>, ValueError> {
    if let Some(l) = lhs {
        ensure_mutable(arena, l)?;
    }
    if divisor == 0 {
        report_zero_divisor(arena);
        let target = match lhs {
            Some(l) => l,
            None => arena.allocate()?,
        };
        let sentinel = saturate(arena.value(Some(target)));
        arena.set_value(target, sentinel);
        return Ok(Computed::DividedByZero(Some(target)));
    }
    if let Some(l) = lhs {
        let remainder = arena.value(Some(l)).wrapping_rem(i64::from(divisor));
        arena.set_value(l, remainder);
    }
    Ok(Computed::Exact(lhs))
}

/// Modulo `dividend mod rhs` with a plain-integer result.
pub fn int_imod(arena: &mut Arena, dividend: i32, rhs: Operand) -> Computed<i32> {
    if arena.value(rhs) == 0 {
        report_zero_divisor(arena);
        arena.release_operand(rhs);
        let sentinel = if dividend < 0 { i32::MIN } else { i32::MAX };
        return Computed::DividedByZero(sentinel);
    }
    let remainder = i64::from(dividend).wrapping_rem(arena.value(rhs)) as i32;
    arena.release_operand(rhs);
    Computed::Exact(remainder)
}
