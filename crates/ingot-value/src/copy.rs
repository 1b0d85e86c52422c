//! Copy-policy entry points consumed by the host's container layer.
//!
//! When a boxed integer sits inside a host container (a set element, an
//! array cell, a fold accumulator), the container drives it through
//! these four policies rather than the plain operators: `copy` and
//! `reset` replace the destination's value, `append` accumulates for
//! reduction folds, and `hash` feeds the container's bucketing. None of
//! them consume the source reference.

use ingot_arena::Arena;
use ingot_core::{Int64Handle, Operand};

use crate::{ensure_mutable, ValueError};

/// Replace the destination's value with the source's (`None` = 0).
///
/// Refuses a constant destination, leaving it unchanged.
pub fn copy_into(arena: &mut Arena, dest: Int64Handle, source: Operand) -> Result<(), ValueError> {
    ensure_mutable(arena, dest)?;
    let value = arena.value(source);
    arena.set_value(dest, value);
    Ok(())
}

/// Reinitialize the destination from the source.
///
/// Same contract as [`copy_into`]; a separate entry point because the
/// host invokes it on container reinitialization.
pub fn reset(arena: &mut Arena, dest: Int64Handle, source: Operand) -> Result<(), ValueError> {
    copy_into(arena, dest, source)
}

/// Accumulate `dest += source` for reduction folds; wraps on overflow.
///
/// A null source contributes nothing.
pub fn append(arena: &mut Arena, dest: Int64Handle, source: Operand) -> Result<(), ValueError> {
    ensure_mutable(arena, dest)?;
    if source.is_some() {
        let sum = arena.value(Some(dest)).wrapping_add(arena.value(source));
        arena.set_value(dest, sum);
    }
    Ok(())
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable hash over the value's 8-byte little-endian form.
///
/// FNV-1a, so the result is identical across platforms and runs; the
/// null operand hashes as the value 0.
pub fn hash(arena: &Arena, source: Operand) -> u64 {
    let mut state = FNV_OFFSET;
    for byte in arena.value(source).to_le_bytes() {
        state ^= u64::from(byte);
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}
