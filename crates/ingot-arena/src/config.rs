//! The slot store's capacity schedule.

/// Capacity schedule for the slot store.
///
/// Growth is geometric while the store is small and linear once it is
/// large: an empty store jumps to [`GrowthPolicy::INITIAL_CAPACITY`],
/// capacity doubles while below [`GrowthPolicy::GEOMETRIC_LIMIT`], and
/// above that it advances by fixed [`GrowthPolicy::LINEAR_STEP`]
/// increments. The schedule is applied repeatedly until a request fits.
#[derive(Clone, Copy, Debug)]
pub struct GrowthPolicy;

impl GrowthPolicy {
    /// Capacity after the first growth of an empty store.
    pub const INITIAL_CAPACITY: usize = 340;

    /// Below this capacity the store doubles; at or above it grows
    /// linearly.
    pub const GEOMETRIC_LIMIT: usize = 10_000;

    /// Linear growth increment once past [`Self::GEOMETRIC_LIMIT`].
    pub const LINEAR_STEP: usize = 10_000;

    /// The capacity one growth step produces from `current`.
    pub fn next(current: usize) -> usize {
        if current == 0 {
            Self::INITIAL_CAPACITY
        } else if current < Self::GEOMETRIC_LIMIT {
            current * 2
        } else {
            current + Self::LINEAR_STEP
        }
    }

    /// The smallest scheduled capacity reaching at least `min_total`.
    ///
    /// Applies [`Self::next`] zero or more times starting from
    /// `current`; a `current` already at or past `min_total` is
    /// returned unchanged.
    pub fn required_for(current: usize, min_total: usize) -> usize {
        let mut capacity = current;
        while capacity < min_total {
            capacity = Self::next(capacity);
        }
        capacity
    }
}
