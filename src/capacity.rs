//! Capacity policy for the heap storage
//!
//! Storage doubles whenever an insert would exceed the current capacity.
//! Shrinking is opt-in: when enabled, capacity is halved once occupancy falls
//! to a quarter or less, but never below the initial capacity.
//!
//! ```rust
//! use indexed_min_heap::{CapacityPolicy, IndexedMinHeap};
//!
//! let policy = CapacityPolicy::new().with_initial_capacity(64).with_shrink(true);
//! let queue: IndexedMinHeap<u32, u32> = IndexedMinHeap::with_policy(policy);
//! assert!(queue.capacity() >= 64);
//! ```

/// Default number of slots allocated up front
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Occupancy at or below `capacity / SHRINK_DIVISOR` triggers a shrink
const SHRINK_DIVISOR: usize = 4;

/// Growth and shrink rules for an [`IndexedMinHeap`](crate::IndexedMinHeap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    initial_capacity: usize,
    shrink: bool,
}

impl CapacityPolicy {
    /// Policy with the default initial capacity and shrinking disabled
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            shrink: false,
        }
    }

    /// Sets the number of slots allocated up front
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enables or disables shrinking at the quarter-full low-water mark
    pub const fn with_shrink(mut self, enabled: bool) -> Self {
        self.shrink = enabled;
        self
    }

    /// Returns the configured initial capacity
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns true if shrinking is enabled
    pub const fn is_shrink_enabled(&self) -> bool {
        self.shrink
    }

    /// Capacity to grow to when `current` is full
    pub fn grown(&self, current: usize) -> usize {
        current.saturating_mul(2).max(1)
    }

    /// Capacity to shrink to, if `len` has dropped under the low-water mark
    ///
    /// Returns `None` when shrinking is disabled or not warranted.
    pub fn shrunk(&self, len: usize, current: usize) -> Option<usize> {
        if !self.shrink || current <= self.initial_capacity {
            return None;
        }
        if len > current / SHRINK_DIVISOR {
            return None;
        }
        Some((current / 2).max(self.initial_capacity))
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::new()
    }
}
