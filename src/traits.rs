//! Common traits for updatable priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: enqueue, dequeue and peek on (element, value) pairs
//! - [`UpdatablePriorityQueue`]: adds in-place value updates and membership
//!   tests for elements that are already queued
//!
//! Unlike handle-based heaps, elements are addressed by their own identity
//! (`Eq + Hash`), so a caller never has to keep a handle around to update a
//! priority later.

use thiserror::Error;

/// Error type for queue operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The value cannot be ordered (it is not comparable with itself, e.g. NaN)
    #[error("value is not well-defined: it cannot be compared with itself")]
    InvalidArgument,
    /// The element is already in the queue
    #[error("element is already present in the queue")]
    DuplicateElement,
    /// The queue has no entries
    #[error("queue is empty")]
    EmptyQueue,
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Base trait for min-priority queues over (element, value) pairs
///
/// # Example
///
/// ```rust
/// use indexed_min_heap::{IndexedMinHeap, PriorityQueue};
///
/// let mut queue = IndexedMinHeap::new();
/// queue.enqueue("a", 5).unwrap();
/// queue.enqueue("b", 3).unwrap();
///
/// assert_eq!(queue.peek_min(), Ok((&"b", &3)));
/// assert_eq!(queue.dequeue(), Ok(("b", 3)));
/// ```
pub trait PriorityQueue<E, V> {
    /// Adds `element` with priority `value`
    ///
    /// # Errors
    /// - [`QueueError::InvalidArgument`] if `value` cannot be ordered
    /// - [`QueueError::DuplicateElement`] if `element` is already queued
    fn enqueue(&mut self, element: E, value: V) -> Result<()>;

    /// Removes and returns the entry with the smallest value
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if there is nothing to remove.
    fn dequeue(&mut self) -> Result<(E, V)>;

    /// Returns the entry with the smallest value without removing it
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if the queue is empty.
    fn peek_min(&self) -> Result<(&E, &V)>;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of queued elements
    fn len(&self) -> usize;
}

/// Priority queue whose entries can be re-prioritized in place
///
/// This is the interface a shortest-path or spanning-tree routine needs for
/// its frontier: `update` when a better priority is found, falling back to
/// `enqueue` when it returns `false`.
///
/// ```rust
/// use indexed_min_heap::{IndexedMinHeap, PriorityQueue, UpdatablePriorityQueue};
///
/// let mut frontier = IndexedMinHeap::new();
/// frontier.enqueue(7u32, 40u64).unwrap();
///
/// for (node, dist) in [(7u32, 12u64), (9, 30)] {
///     if !frontier.update(&node, dist).unwrap() {
///         frontier.enqueue(node, dist).unwrap();
///     }
/// }
/// assert_eq!(frontier.dequeue(), Ok((7, 12)));
/// ```
pub trait UpdatablePriorityQueue<E, V>: PriorityQueue<E, V> {
    /// Replaces the value of a queued element and restores heap order
    ///
    /// Returns `Ok(false)` without touching the queue if `element` is absent.
    ///
    /// # Errors
    /// [`QueueError::InvalidArgument`] if `value` cannot be ordered.
    fn update(&mut self, element: &E, value: V) -> Result<bool>;

    /// Returns true if `element` is currently queued
    fn contains(&self, element: &E) -> bool;
}

/// Returns true if `value` takes part in its own ordering
///
/// Values for which this is false (NaN-like) would break heap order and are
/// rejected before any mutation.
pub(crate) fn is_well_defined<V: PartialOrd>(value: &V) -> bool {
    value.partial_cmp(value).is_some()
}
