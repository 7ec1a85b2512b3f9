//! Indexed Min-Heap Priority Queues for Rust
//!
//! This crate provides a binary min-heap whose entries are addressed by the
//! element itself, so the priority of any queued element can be raised or
//! lowered in place in O(log n). A location index (element → heap slot) is kept
//! consistent with every move inside the heap.
//!
//! # Features
//!
//! - **IndexedMinHeap**: O(log n) enqueue, dequeue, update and remove; O(1) peek and membership
//! - **StableIndexedMinHeap**: the same, with FIFO order among equal priorities
//! - **CapacityPolicy**: doubling growth and optional shrink at a quarter-full low-water mark
//!
//! Both queues implement the [`PriorityQueue`] and [`UpdatablePriorityQueue`]
//! traits, which is the interface a shortest-path or spanning-tree routine
//! needs for its frontier.
//!
//! The queues are not internally synchronized. Wrap one in a lock if it has to
//! be shared between threads.
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::{IndexedMinHeap, QueueError};
//!
//! let mut queue = IndexedMinHeap::new();
//! queue.enqueue("a", 5).unwrap();
//! queue.enqueue("b", 3).unwrap();
//!
//! assert_eq!(queue.update(&"a", 1), Ok(true));
//! assert_eq!(queue.update(&"z", 1), Ok(false));
//! assert_eq!(queue.enqueue("b", 0), Err(QueueError::DuplicateElement));
//!
//! assert_eq!(queue.dequeue(), Ok(("a", 1)));
//! assert_eq!(queue.dequeue(), Ok(("b", 3)));
//! assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
//! ```

pub mod capacity;
pub mod indexed;
pub mod stable;
pub mod traits;

// Re-export the main types for convenience
pub use capacity::CapacityPolicy;
pub use indexed::IndexedMinHeap;
pub use stable::StableIndexedMinHeap;
pub use traits::{PriorityQueue, QueueError, Result, UpdatablePriorityQueue};
