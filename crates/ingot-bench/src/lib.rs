//! Shared fixtures for the Ingot benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ingot_arena::Arena;
use ingot_core::{Int64Handle, MemorySink};

/// A fresh run context with a throwaway sink.
pub fn run_context() -> Arena {
    Arena::new(MemorySink::new())
}

/// Fill the arena with `count` boxes holding 0..count.
pub fn fill(arena: &mut Arena, count: i64) -> Vec<Int64Handle> {
    (0..count)
        .map(|i| {
            let h = arena.allocate().expect("bench arena never exhausts");
            arena.set_value(h, i);
            h
        })
        .collect()
}
