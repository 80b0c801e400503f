/// Capacity used by `HashArray::new`
pub const DEFAULT_CAPACITY: usize = 16;

/// Smaller requested capacities are clamped up to this. Doubling needs a non zero start.
pub const MIN_CAPACITY: usize = 1;
