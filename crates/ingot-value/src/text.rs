//! Decimal text rendering and parsing.
//!
//! Rendering produces plain decimal digits with a leading `-` for
//! negative values; the null operand renders as `"0"`. Parsing follows
//! the host's prefix convention: optional leading ASCII whitespace, an
//! optional sign, then decimal digits, stopping at the first non-digit.
//! A parse that consumes no digit is a hard error, so empty input, pure
//! whitespace, and a bare sign are all rejected. Values beyond the
//! representable range saturate.

use ingot_arena::Arena;
use ingot_core::{Int64Handle, Operand};
use smallvec::SmallVec;

use crate::{ensure_mutable, ValueError};

/// Render an operand as decimal text; the null operand is `"0"`.
pub fn to_text(arena: &Arena, source: Operand) -> String {
    let value = arena.value(source);
    // Longest rendering is i64::MIN at 20 bytes; the buffer never spills.
    let mut buf: SmallVec<[u8; 24]> = SmallVec::new();
    let mut magnitude = value.unsigned_abs();
    loop {
        buf.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        buf.push(b'-');
    }
    buf.reverse();
    String::from_utf8(buf.into_vec()).expect("decimal rendering is ASCII")
}

/// Parse a decimal prefix of `input` into `dest`.
///
/// Returns the number of bytes consumed (whitespace, sign, and digits),
/// so the host can continue scanning after the literal. Hard errors:
/// [`ValueError::ConstantModified`] for a constant destination (checked
/// before any input is examined) and [`ValueError::MalformedText`] when
/// no digit was consumed; `dest` is unchanged on both.
pub fn from_text(
    arena: &mut Arena,
    dest: Int64Handle,
    input: &str,
) -> Result<usize, ValueError> {
    ensure_mutable(arena, dest)?;

    let bytes = input.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let negative = match bytes.get(pos).copied() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        value = if negative {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(digit))
                .unwrap_or(i64::MIN)
        } else {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .unwrap_or(i64::MAX)
        };
        digits += 1;
        pos += 1;
    }

    if digits == 0 {
        arena.report("int64: malformed integer literal");
        return Err(ValueError::MalformedText { consumed: pos });
    }

    arena.set_value(dest, value);
    Ok(pos)
}
