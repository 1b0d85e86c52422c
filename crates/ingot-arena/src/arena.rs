//! The run context: slot store, free list, and diagnostics.

use ingot_core::{DiagnosticSink, Int64Handle, Operand};

use crate::error::ArenaError;
use crate::slot::Slot;
use crate::store::SlotStore;

/// The run-scoped owner of all boxed-integer storage.
///
/// Exactly one `Arena` exists per host run: the host constructs it at
/// run start (injecting its diagnostic sink), threads it through every
/// operation as the run context, and drops it at run end. Dropping
/// releases the backing buffer unconditionally; leaked handles do not
/// keep anything alive.
///
/// Released slots are recycled LIFO through a free list before the
/// store grows, so create/release churn settles into O(1) reuse of the
/// most recently freed index.
///
/// The arena is single-threaded by design; an embedder driving it from
/// several threads must serialize access externally.
pub struct Arena {
    store: SlotStore,
    /// Indices of slots at reference count 0, most recently freed last.
    free_list: Vec<u32>,
    /// Slots currently at reference count >= 1.
    in_use: usize,
    sink: Box<dyn DiagnosticSink>,
}

impl Arena {
    /// Create the run context with the host's diagnostic sink.
    ///
    /// No slot memory is reserved until the first allocation.
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            store: SlotStore::new(),
            free_list: Vec::new(),
            in_use: 0,
            sink: Box::new(sink),
        }
    }

    /// Allocate a fresh mutable box holding 0, reference count 1.
    ///
    /// Recycles the most recently freed slot if one is available,
    /// otherwise takes a fresh slot from the store (growing it if at
    /// capacity). An allocation failure is reported to the sink and
    /// leaves the arena usable for all previously issued handles.
    pub fn allocate(&mut self) -> Result<Int64Handle, ArenaError> {
        self.allocate_slot(Slot::fresh())
    }

    /// Allocate a constant box copying `template`'s value (`None` = 0).
    ///
    /// The constant flag is set for the slot's whole lifetime; every
    /// in-place mutation of the new box will fail. The template's own
    /// reference is not consumed.
    pub fn allocate_constant_copy(&mut self, template: Operand) -> Result<Int64Handle, ArenaError> {
        let value = self.value(template);
        self.allocate_slot(Slot::constant(value))
    }

    fn allocate_slot(&mut self, slot: Slot) -> Result<Int64Handle, ArenaError> {
        let index = if let Some(index) = self.free_list.pop() {
            *self.store.slot_mut(Int64Handle(index)) = slot;
            index
        } else {
            match self.store.append(slot) {
                Ok(index) => index,
                Err(e) => {
                    self.sink.message("int64: out of memory");
                    return Err(e);
                }
            }
        };
        self.in_use += 1;
        Ok(Int64Handle(index))
    }

    /// Take one more reference to a box; returns the same handle.
    ///
    /// Boxes are reference-shared, not copy-on-write: a host that needs
    /// an independently mutable copy must clone explicitly.
    pub fn retain(&mut self, handle: Int64Handle) -> Int64Handle {
        self.store.slot_mut(handle).ref_count += 1;
        handle
    }

    /// Drop one reference; at zero the slot returns to the free list.
    ///
    /// Releasing a slot already at reference count 0 is a contract
    /// violation (the host must pair every release with a prior
    /// create/retain); it is not detected beyond a debug assertion.
    pub fn release(&mut self, handle: Int64Handle) {
        let slot = self.store.slot_mut(handle);
        debug_assert!(
            slot.ref_count > 0,
            "release of slot {handle} already at reference count 0"
        );
        slot.ref_count -= 1;
        if slot.ref_count == 0 {
            self.free_list.push(handle.0);
            self.in_use -= 1;
        }
    }

    /// Release an operand's reference; the null operand is a no-op.
    pub fn release_operand(&mut self, operand: Operand) {
        if let Some(handle) = operand {
            self.release(handle);
        }
    }

    /// Read an operand's value; the null operand reads as 0.
    pub fn value(&self, operand: Operand) -> i64 {
        match operand {
            Some(handle) => self.store.slot(handle).value(),
            None => 0,
        }
    }

    /// Overwrite a box's value in place.
    ///
    /// This is the raw store write: the constant-flag contract is
    /// enforced one layer up, by the operator suite.
    pub fn set_value(&mut self, handle: Int64Handle, value: i64) {
        self.store.slot_mut(handle).value = value;
    }

    /// Whether the box was created as a constant.
    pub fn is_constant(&self, handle: Int64Handle) -> bool {
        self.store.slot(handle).is_constant()
    }

    /// The box's current reference count.
    pub fn ref_count(&self, handle: Int64Handle) -> u32 {
        self.store.slot(handle).ref_count()
    }

    /// Report a diagnostic message through the host's sink.
    pub fn report(&mut self, text: &str) {
        self.sink.message(text);
    }

    /// Number of boxes currently at reference count >= 1.
    pub fn live_count(&self) -> usize {
        self.in_use
    }

    /// Number of slots waiting on the free list.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Scheduled slot capacity (including the sentinel).
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Total bytes held by the run context.
    ///
    /// Covers the arena frame, the slot store at scheduled capacity,
    /// and the free list's backing storage. This is the figure the host
    /// memory-usage service reports for the whole context.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.store.memory_bytes()
            + self.free_list.capacity() * std::mem::size_of::<u32>()
    }

    /// Marginal cost of one additional box, in bytes.
    pub fn slot_bytes() -> usize {
        SlotStore::slot_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingot_core::MemorySink;

    fn arena() -> Arena {
        Arena::new(MemorySink::new())
    }

    #[test]
    fn first_allocation_is_index_one() {
        let mut a = arena();
        let h = a.allocate().unwrap();
        assert_eq!(h, Int64Handle(1));
        assert_eq!(a.value(Some(h)), 0);
        assert_eq!(a.ref_count(h), 1);
        assert_eq!(a.live_count(), 1);
    }

    #[test]
    fn release_then_allocate_reuses_the_slot_lifo() {
        let mut a = arena();
        let h1 = a.allocate().unwrap();
        let h2 = a.allocate().unwrap();
        assert_ne!(h1, h2);

        a.release(h2);
        a.release(h1);
        // Most recently freed first.
        assert_eq!(a.allocate().unwrap(), h1);
        assert_eq!(a.allocate().unwrap(), h2);
    }

    #[test]
    fn retain_release_round_trip_keeps_value() {
        let mut a = arena();
        let h = a.allocate().unwrap();
        a.set_value(h, 99);

        let same = a.retain(h);
        assert_eq!(same, h);
        assert_eq!(a.ref_count(h), 2);

        a.release(h);
        assert_eq!(a.ref_count(h), 1);
        assert_eq!(a.value(Some(h)), 99);

        a.release(h);
        assert_eq!(a.live_count(), 0);
        assert_eq!(a.free_count(), 1);
    }

    #[test]
    fn recycled_slot_is_reset_to_fresh_state() {
        let mut a = arena();
        let h = a.allocate().unwrap();
        a.set_value(h, -5);
        a.release(h);

        let again = a.allocate().unwrap();
        assert_eq!(again, h);
        assert_eq!(a.value(Some(again)), 0);
        assert_eq!(a.ref_count(again), 1);
        assert!(!a.is_constant(again));
    }

    #[test]
    fn constant_copy_takes_template_value() {
        let mut a = arena();
        let t = a.allocate().unwrap();
        a.set_value(t, 42);

        let c = a.allocate_constant_copy(Some(t)).unwrap();
        assert_eq!(a.value(Some(c)), 42);
        assert!(a.is_constant(c));
        // Template reference untouched.
        assert_eq!(a.ref_count(t), 1);
    }

    #[test]
    fn constant_copy_of_null_is_zero() {
        let mut a = arena();
        let c = a.allocate_constant_copy(None).unwrap();
        assert_eq!(a.value(Some(c)), 0);
        assert!(a.is_constant(c));
    }

    #[test]
    fn null_operand_reads_as_zero() {
        let a = arena();
        assert_eq!(a.value(None), 0);
    }

    #[test]
    fn release_operand_tolerates_null() {
        let mut a = arena();
        a.release_operand(None);
        assert_eq!(a.live_count(), 0);
    }

    #[test]
    fn growth_past_initial_capacity_keeps_old_handles_valid() {
        let mut a = arena();
        let mut handles = Vec::new();
        for i in 0..400i64 {
            let h = a.allocate().unwrap();
            a.set_value(h, i);
            handles.push(h);
        }
        assert!(a.capacity() > 340);
        for (i, h) in handles.iter().enumerate() {
            assert_eq!(a.value(Some(*h)), i as i64);
        }
    }

    #[test]
    fn memory_usage_reports_capacity_cost() {
        let mut a = arena();
        let before = a.memory_usage();
        a.allocate().unwrap();
        let after = a.memory_usage();
        assert!(after >= before + 340 * Arena::slot_bytes());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// One step of a host allocation trace.
        #[derive(Clone, Copy, Debug)]
        enum Op {
            Create,
            Retain(usize),
            Release(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Create),
                (0usize..64).prop_map(Op::Retain),
                (0usize..64).prop_map(Op::Release),
            ]
        }

        proptest! {
            #[test]
            fn live_count_never_exceeds_capacity(
                ops in proptest::collection::vec(op_strategy(), 1..200),
            ) {
                let mut a = arena();
                // Handles the "host" currently holds, with local counts so
                // releases always pair with a live reference.
                let mut held: Vec<Int64Handle> = Vec::new();
                for op in ops {
                    match op {
                        Op::Create => held.push(a.allocate().unwrap()),
                        Op::Retain(i) => {
                            if !held.is_empty() {
                                let h = held[i % held.len()];
                                held.push(a.retain(h));
                            }
                        }
                        Op::Release(i) => {
                            if !held.is_empty() {
                                let h = held.swap_remove(i % held.len());
                                a.release(h);
                            }
                        }
                    }
                    prop_assert!(a.live_count() <= a.capacity());
                    // Every held handle still dereferences.
                    for &h in &held {
                        prop_assert!(a.ref_count(h) >= 1);
                        let _ = a.value(Some(h));
                    }
                }
            }

            #[test]
            fn delete_then_create_recycles_the_same_index(
                warmup in 1usize..50,
            ) {
                let mut a = arena();
                let mut handles: Vec<Int64Handle> =
                    (0..warmup).map(|_| a.allocate().unwrap()).collect();
                let victim = handles.pop().unwrap();
                a.release(victim);
                prop_assert_eq!(a.allocate().unwrap(), victim);
            }
        }
    }
}
