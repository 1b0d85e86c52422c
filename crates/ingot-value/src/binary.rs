//! The fixed 8-byte little-endian wire form.
//!
//! This is the only stable, externally consumable representation of a
//! boxed integer: byte-identical across platforms sharing endianness.
//! Parsing accepts exactly 8 bytes and nothing else.

use ingot_arena::Arena;
use ingot_core::{Int64Handle, Operand};

use crate::{ensure_mutable, ValueError};

/// Width of the wire form in bytes.
pub const WIRE_BYTES: usize = 8;

/// Serialize an operand; the null operand is eight zero bytes.
pub fn to_bytes(arena: &Arena, source: Operand) -> [u8; WIRE_BYTES] {
    arena.value(source).to_le_bytes()
}

/// Deserialize exactly 8 bytes into `dest`.
///
/// Hard errors: [`ValueError::ConstantModified`] for a constant
/// destination and [`ValueError::WrongBinaryLength`] for any input
/// whose length differs from 8; `dest` is unchanged on both.
pub fn from_bytes(arena: &mut Arena, dest: Int64Handle, input: &[u8]) -> Result<(), ValueError> {
    ensure_mutable(arena, dest)?;
    match <[u8; WIRE_BYTES]>::try_from(input) {
        Ok(bytes) => {
            arena.set_value(dest, i64::from_le_bytes(bytes));
            Ok(())
        }
        Err(_) => {
            arena.report("int64: binary image must be exactly 8 bytes");
            Err(ValueError::WrongBinaryLength {
                expected: WIRE_BYTES,
                got: input.len(),
            })
        }
    }
}
