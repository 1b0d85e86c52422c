//! Contiguous slot storage with policy-driven growth.

use ingot_core::Int64Handle;

use crate::config::GrowthPolicy;
use crate::error::ArenaError;
use crate::slot::Slot;

/// Contiguous storage for boxed-integer slots, addressed by handle index.
///
/// The store materializes slots on demand up to a capacity chosen by the
/// [`GrowthPolicy`]; capacity only ever grows. Slot 0 is the reserved
/// sentinel, created by the first growth and never handed out, so the
/// first issued handle is index 1 and index 0 stays distinct from the
/// host's null reference.
///
/// Growth relocates the backing buffer but never renumbers slots, so
/// every previously issued handle stays valid. A failed growth leaves
/// the store untouched.
pub struct SlotStore {
    /// Materialized slots; `slots.len() <= capacity` always.
    slots: Vec<Slot>,
    /// Scheduled capacity in slots. Tracked separately from the `Vec`'s
    /// own capacity so the schedule stays observable.
    capacity: usize,
}

impl SlotStore {
    /// Create an empty store. No memory is reserved until first use.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
        }
    }

    /// Scheduled capacity in slots (including the sentinel).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of materialized slots (including the sentinel).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ensure capacity for `min_additional` more slots.
    ///
    /// Applies the [`GrowthPolicy`] schedule until the request fits and
    /// reserves exactly the scheduled capacity. The first successful
    /// growth also materializes the sentinel slot 0 (accounted for in
    /// the request). On allocation failure the store is left exactly as
    /// it was: no capacity change, no sentinel, all handles still valid.
    pub fn grow(&mut self, min_additional: usize) -> Result<(), ArenaError> {
        let sentinel = usize::from(self.slots.is_empty());
        let min_total = self.slots.len() + sentinel + min_additional;
        if min_total <= self.capacity {
            return Ok(());
        }

        let target = GrowthPolicy::required_for(self.capacity, min_total);
        let additional = target - self.slots.len();
        if self.slots.try_reserve_exact(additional).is_err() {
            return Err(ArenaError::AllocationFailed {
                requested_slots: additional,
                capacity: self.capacity,
            });
        }

        self.capacity = target;
        if self.slots.is_empty() {
            self.slots.push(Slot::sentinel());
        }
        Ok(())
    }

    /// Materialize one slot, growing if the store is at capacity.
    ///
    /// Returns the new slot's index. The first call returns index 1,
    /// after the sentinel.
    pub(crate) fn append(&mut self, slot: Slot) -> Result<u32, ArenaError> {
        if self.slots.len() + 1 > self.capacity {
            self.grow(1)?;
        }
        let index = self.slots.len() as u32;
        self.slots.push(slot);
        Ok(index)
    }

    /// Shared access to a slot. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the handle's index was never materialized. Handle
    /// validity beyond bounds is the caller's contract.
    pub fn slot(&self, handle: Int64Handle) -> &Slot {
        &self.slots[handle.index()]
    }

    /// Mutable access to a slot. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the handle's index was never materialized.
    pub fn slot_mut(&mut self, handle: Int64Handle) -> &mut Slot {
        &mut self.slots[handle.index()]
    }

    /// Bytes held by this store: its own frame plus the backing buffer
    /// at scheduled capacity.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity * std::mem::size_of::<Slot>()
    }

    /// Marginal cost of one slot, in bytes.
    pub fn slot_bytes() -> usize {
        std::mem::size_of::<Slot>()
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}
