//! End-to-end tests driving the full run lifecycle through the facade:
//! create/duplicate/delete churn, slot recycling, growth, constant
//! protection, division sentinels, and the host status mapping.

use ingot::prelude::*;
use ingot::value::{arith, binary, compare, convert, copy, divide, text};

fn run_context() -> (Arena, MemorySink) {
    let sink = MemorySink::new();
    (Arena::new(sink.clone()), sink)
}

#[test]
fn create_duplicate_delete_then_reuse() {
    let (mut arena, _) = run_context();

    let h = convert::from_int(&mut arena, 77).unwrap();
    assert_eq!(arena.ref_count(h), 1);

    // Duplicate raises the count on the same slot.
    let dup = arena.retain(h);
    assert_eq!(dup, h);
    assert_eq!(arena.ref_count(h), 2);

    // First delete leaves the box alive with its value unchanged.
    arena.release(h);
    assert_eq!(arena.ref_count(h), 1);
    assert_eq!(arena.value(Some(h)), 77);

    // Second delete frees the slot; the next create reuses its index.
    arena.release(h);
    assert_eq!(arena.live_count(), 0);
    let next = convert::create(&mut arena).unwrap();
    assert_eq!(next, h);
    assert_eq!(arena.value(Some(next)), 0);
}

#[test]
fn growth_keeps_every_issued_handle_resolvable() {
    let (mut arena, _) = run_context();

    let mut handles = Vec::new();
    for i in 0..1000i64 {
        let h = convert::create(&mut arena).unwrap();
        arith::assign_int(&mut arena, Some(h), i as i32).unwrap();
        handles.push(h);
    }

    assert!(arena.capacity() > 340);
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(arena.value(Some(*h)), i as i64);
    }
}

#[test]
fn constant_copy_survives_every_mutation_attempt() {
    let (mut arena, sink) = run_context();

    let template = convert::from_int(&mut arena, 42).unwrap();
    let c = convert::constant_copy(&mut arena, Some(template)).unwrap();
    let source = convert::from_int(&mut arena, 9).unwrap();

    assert_eq!(
        arith::assign(&mut arena, Some(c), Some(source)),
        Err(ValueError::ConstantModified)
    );
    assert_eq!(
        text::from_text(&mut arena, c, "7"),
        Err(ValueError::ConstantModified)
    );
    assert_eq!(
        binary::from_bytes(&mut arena, c, &[0u8; 8]),
        Err(ValueError::ConstantModified)
    );
    assert_eq!(
        copy::copy_into(&mut arena, c, None),
        Err(ValueError::ConstantModified)
    );

    assert_eq!(arena.value(Some(c)), 42);
    assert!(sink.contains("constant"));
}

#[test]
fn division_by_zero_maps_to_the_math_error_status() {
    let (mut arena, sink) = run_context();

    let dividend = convert::from_int(&mut arena, 5).unwrap();
    let outcome = divide::idiv(&mut arena, Some(dividend), None);
    assert_eq!(Status::of(&outcome), Status::MathError);
    let result = outcome.unwrap().into_value();
    assert_eq!(arena.value(result), i64::MAX);

    let negative = convert::from_int(&mut arena, -5).unwrap();
    let outcome = divide::idiv(&mut arena, Some(negative), None);
    assert_eq!(Status::of(&outcome), Status::MathError);
    let result = outcome.unwrap().into_value();
    assert_eq!(arena.value(result), i64::MIN);

    let quotient = divide::div(&mut arena, result, None);
    assert_eq!(Status::from(&quotient), Status::MathError);
    assert_eq!(quotient.into_value(), f64::NEG_INFINITY);

    assert!(sink.contains("division by zero"));
}

#[test]
fn exact_division_maps_to_ok() {
    let (mut arena, _) = run_context();
    let dividend = convert::from_int(&mut arena, 9).unwrap();
    let divisor = convert::from_int(&mut arena, 2).unwrap();
    let quotient = divide::div(&mut arena, Some(dividend), Some(divisor));
    assert_eq!(Status::from(&quotient), Status::Ok);
    assert_eq!(quotient.into_value(), 4.5);
}

#[test]
fn summation_fold_through_copy_policies() {
    let (mut arena, _) = run_context();

    // The container initializes its accumulator with the fold identity,
    // appends each element, and hashes the result for bucketing.
    let acc = convert::create(&mut arena).unwrap();
    for v in 1..=10 {
        let elem = convert::from_int(&mut arena, v).unwrap();
        copy::append(&mut arena, acc, Some(elem)).unwrap();
        arena.release(elem);
    }
    assert_eq!(arena.value(Some(acc)), 55);

    let direct = convert::from_int(&mut arena, 55).unwrap();
    assert_eq!(
        copy::hash(&arena, Some(acc)),
        copy::hash(&arena, Some(direct))
    );
    assert_eq!(
        compare::compare(&arena, Some(acc), Some(direct)),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn serialization_round_trips_agree() {
    let (mut arena, _) = run_context();

    for v in [0i64, 1, -1, 42, i64::MAX, i64::MIN] {
        let src = convert::create(&mut arena).unwrap();
        arena.set_value(src, v);

        let rendered = text::to_text(&arena, Some(src));
        let parsed = convert::create(&mut arena).unwrap();
        text::from_text(&mut arena, parsed, &rendered).unwrap();
        assert_eq!(arena.value(Some(parsed)), v);

        let wire = binary::to_bytes(&arena, Some(src));
        let decoded = convert::create(&mut arena).unwrap();
        binary::from_bytes(&mut arena, decoded, &wire).unwrap();
        assert_eq!(arena.value(Some(decoded)), v);
    }
}

#[test]
fn null_operands_behave_as_zero_everywhere() {
    let (mut arena, _) = run_context();

    assert_eq!(text::to_text(&arena, None), "0");
    assert_eq!(binary::to_bytes(&arena, None), [0u8; 8]);
    assert!(compare::eq_int(&arena, None, 0));
    assert_eq!(convert::as_int(&arena, None), 0);
    assert_eq!(arith::add(&mut arena, None, None).unwrap(), None);
    assert_eq!(arith::mul(&mut arena, None, None).unwrap(), None);
    assert_eq!(
        arith::assign(&mut arena, None, None),
        Err(ValueError::Uninitialized)
    );
}

#[test]
fn memory_usage_reports_context_and_per_slot_cost() {
    let (mut arena, _) = run_context();

    let empty = arena.memory_usage();
    convert::create(&mut arena).unwrap();
    let after = arena.memory_usage();

    assert!(after > empty);
    assert!(after - empty >= 340 * Arena::slot_bytes());
    assert!(Arena::slot_bytes() >= 12); // an i64 value plus its metadata
}

#[test]
fn run_teardown_drops_leaked_handles() {
    let (mut arena, _) = run_context();
    // The host "leaks" live references; dropping the arena must still
    // release everything without complaint.
    for _ in 0..100 {
        let h = convert::create(&mut arena).unwrap();
        arena.retain(h);
    }
    assert_eq!(arena.live_count(), 100);
    drop(arena);
}
