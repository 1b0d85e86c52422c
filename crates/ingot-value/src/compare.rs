//! Comparisons against the host's plain integer, and three-way compare.
//!
//! Comparisons never consume references; a null operand compares as 0.
//! Both operand orders are provided because the host registers each
//! order as a separate entry point.

use std::cmp::Ordering;

use ingot_arena::Arena;
use ingot_core::Operand;

/// `operand = value`.
pub fn eq_int(arena: &Arena, operand: Operand, value: i32) -> bool {
    arena.value(operand) == i64::from(value)
}

/// `value = operand`.
pub fn int_eq(arena: &Arena, value: i32, operand: Operand) -> bool {
    eq_int(arena, operand, value)
}

/// `operand < value`.
pub fn lt_int(arena: &Arena, operand: Operand, value: i32) -> bool {
    arena.value(operand) < i64::from(value)
}

/// `value < operand`.
pub fn int_lt(arena: &Arena, value: i32, operand: Operand) -> bool {
    i64::from(value) < arena.value(operand)
}

/// `operand > value`.
pub fn gt_int(arena: &Arena, operand: Operand, value: i32) -> bool {
    arena.value(operand) > i64::from(value)
}

/// `value > operand`.
pub fn int_gt(arena: &Arena, value: i32, operand: Operand) -> bool {
    i64::from(value) > arena.value(operand)
}

/// Three-way comparison of two boxed operands.
///
/// This is the single comparison primitive the host's containers use
/// for ordering and equality; the six relational operators all derive
/// from it.
pub fn compare(arena: &Arena, a: Operand, b: Operand) -> Ordering {
    arena.value(a).cmp(&arena.value(b))
}
