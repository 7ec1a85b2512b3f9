//! Indexed binary min-heap with in-place priority updates
//!
//! [`IndexedMinHeap`] stores (element, value) pairs in a dense array-backed
//! binary heap and keeps a location index mapping every queued element to its
//! current slot. The index turns "find the element, then repair the heap" into
//! a single O(1) lookup followed by one O(log n) percolation, so values can be
//! raised or lowered in place.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `enqueue`   | O(log n) amortized |
//! | `dequeue`   | O(log n)   |
//! | `update`    | O(log n)   |
//! | `remove`    | O(log n)   |
//! | `peek_min`  | O(1)       |
//! | `contains`  | O(1)       |
//!
//! # Element identity
//!
//! Elements are located through `Eq` and `Hash`. An element's hash and
//! equality must not change while it is queued (for example through interior
//! mutability); if they do, lookups may miss it and the queue's behavior is
//! unspecified, though it stays memory safe.
//!
//! # Ties
//!
//! Comparisons are strict: an entry only moves past another whose value is
//! strictly greater (or smaller), so equal values never swap. No order among
//! equal values is promised; use
//! [`StableIndexedMinHeap`](crate::stable::StableIndexedMinHeap) for FIFO ties.
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::IndexedMinHeap;
//!
//! let mut queue = IndexedMinHeap::new();
//! queue.enqueue("a", 5).unwrap();
//! queue.enqueue("b", 3).unwrap();
//! queue.enqueue("c", 8).unwrap();
//!
//! assert!(queue.update(&"c", 1).unwrap());
//! assert_eq!(queue.dequeue(), Ok(("c", 1)));
//! assert_eq!(queue.dequeue(), Ok(("b", 3)));
//! assert_eq!(queue.len(), 1);
//! ```

use crate::capacity::CapacityPolicy;
use crate::traits::{is_well_defined, PriorityQueue, QueueError, Result, UpdatablePriorityQueue};
use log::{debug, trace};
use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A binary min-heap whose entries are addressable by element
///
/// The heap slots live in a contiguous vector; slot `i` has parent
/// `(i - 1) / 2` and children `2i + 1` and `2i + 2`. The location index maps
/// each queued element to its slot and is updated together with every move.
///
/// `S` is the hasher used for the location index and defaults to FxHash.
#[derive(Clone)]
pub struct IndexedMinHeap<E, V, S = FxBuildHasher> {
    /// Heap slots `[0, len)`; nothing is stored beyond `len`
    data: Vec<(E, V)>,
    /// Element to slot in `data`
    index: HashMap<E, usize, S>,
    policy: CapacityPolicy,
}

impl<E, V> IndexedMinHeap<E, V> {
    /// Creates an empty queue with the default [`CapacityPolicy`]
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::default())
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(CapacityPolicy::new().with_initial_capacity(capacity))
    }

    /// Creates an empty queue configured by `policy`
    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self::with_policy_and_hasher(policy, FxBuildHasher)
    }
}

impl<E, V, S> IndexedMinHeap<E, V, S> {
    /// Creates an empty queue configured by `policy`, indexing with `hasher`
    pub fn with_policy_and_hasher(policy: CapacityPolicy, hasher: S) -> Self {
        let capacity = policy.initial_capacity();
        Self {
            data: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            policy,
        }
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of heap slots currently allocated
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the capacity policy this queue was built with
    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Iterates over all entries in heap order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = (&E, &V)> + '_ {
        self.data.iter().map(|(element, value)| (element, value))
    }

    /// Removes every entry, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }
}

impl<E, V, S> IndexedMinHeap<E, V, S>
where
    E: Eq + Hash + Clone,
    V: PartialOrd,
    S: BuildHasher,
{
    /// Adds `element` with priority `value`
    ///
    /// # Errors
    /// - [`QueueError::InvalidArgument`] if `value` is not comparable with
    ///   itself (e.g. `f64::NAN`)
    /// - [`QueueError::DuplicateElement`] if `element` is already queued
    ///
    /// The queue is left untouched on error.
    pub fn enqueue(&mut self, element: E, value: V) -> Result<()> {
        if !is_well_defined(&value) {
            debug!("rejected enqueue: value is not comparable with itself");
            return Err(QueueError::InvalidArgument);
        }
        if self.index.contains_key(&element) {
            debug!("rejected enqueue: element already queued");
            return Err(QueueError::DuplicateElement);
        }

        self.grow_if_full();
        let slot = self.data.len();
        self.index.insert(element.clone(), slot);
        self.data.push((element, value));
        self.percolate_up(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest value
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<(E, V)> {
        if self.data.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let (element, value) = self.data.swap_remove(0);
        self.index.remove(&element);
        if !self.data.is_empty() {
            self.relocate(0);
            self.sift_down(0);
        }
        self.shrink_if_sparse();
        Ok((element, value))
    }

    /// Returns the entry with the smallest value without removing it
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn peek_min(&self) -> Result<(&E, &V)> {
        self.data
            .first()
            .map(|(element, value)| (element, value))
            .ok_or(QueueError::EmptyQueue)
    }

    /// Replaces the value of `element` and moves it to its new heap position
    ///
    /// The entry percolates up if the new value is smaller than its parent's,
    /// sifts down if it is larger than a child's, and otherwise stays put.
    /// Returns `Ok(false)` and leaves the queue unchanged if `element` is not
    /// queued.
    ///
    /// # Errors
    /// [`QueueError::InvalidArgument`] if `value` is not comparable with
    /// itself. The queue is left untouched.
    pub fn update<Q>(&mut self, element: &Q, value: V) -> Result<bool>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(element) {
            Some(&slot) => self.replace_value(slot, value).map(|()| true),
            None if is_well_defined(&value) => Ok(false),
            None => Err(QueueError::InvalidArgument),
        }
    }

    /// Updates `element` if it is queued, otherwise enqueues it
    ///
    /// Returns `Ok(true)` if the element was newly inserted.
    ///
    /// # Errors
    /// [`QueueError::InvalidArgument`] if `value` is not comparable with itself.
    pub fn enqueue_or_update(&mut self, element: E, value: V) -> Result<bool> {
        match self.index.get(&element) {
            Some(&slot) => self.replace_value(slot, value).map(|()| false),
            None => self.enqueue(element, value).map(|()| true),
        }
    }

    /// Returns true if `element` is currently queued
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(element)
    }

    /// Returns the current value of `element`, if queued
    pub fn get<Q>(&self, element: &Q) -> Option<&V>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(element).map(|&slot| &self.data[slot].1)
    }

    /// Removes `element` from anywhere in the queue
    ///
    /// The last entry fills the vacated slot and is repaired in whichever
    /// direction its value requires.
    pub fn remove<Q>(&mut self, element: &Q) -> Option<(E, V)>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(element)?;
        let entry = self.data.swap_remove(slot);
        if slot < self.data.len() {
            self.relocate(slot);
            self.restore(slot);
        }
        self.shrink_if_sparse();
        Some(entry)
    }

    /// Consumes the queue, returning its entries in ascending value order
    pub fn into_sorted_vec(mut self) -> Vec<(E, V)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(entry) = self.dequeue() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks heap order, index correctness, uniqueness and density
    ///
    /// Intended for tests; runs in O(n).
    pub fn verify_invariants(&self) -> bool {
        if self.index.len() != self.data.len() {
            return false;
        }
        self.data.iter().enumerate().all(|(slot, (element, value))| {
            let indexed = self.index.get(element) == Some(&slot);
            let ordered = slot == 0 || !(*value < self.data[(slot - 1) / 2].1);
            indexed && ordered
        })
    }

    /// Points the index entry of the element in `slot` at `slot`
    fn relocate(&mut self, slot: usize) {
        if let Some(indexed) = self.index.get_mut(&self.data[slot].0) {
            *indexed = slot;
        }
    }

    /// Overwrites the value in `slot` and repairs the heap around it
    fn replace_value(&mut self, slot: usize, value: V) -> Result<()> {
        if !is_well_defined(&value) {
            return Err(QueueError::InvalidArgument);
        }
        self.data[slot].1 = value;
        self.restore(slot);
        Ok(())
    }

    /// Swaps two slots and keeps both index entries in step
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.relocate(a);
        self.relocate(b);
    }

    /// Moves the entry in `slot` up or down, whichever its value requires
    fn restore(&mut self, slot: usize) {
        if slot > 0 && self.data[slot].1 < self.data[(slot - 1) / 2].1 {
            self.percolate_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Move entry at index up while its parent is strictly greater
    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].1 < self.data[parent].1 {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down while a child is strictly smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].1 < self.data[smallest].1 {
                smallest = left;
            }
            if right < len && self.data[right].1 < self.data[smallest].1 {
                smallest = right;
            }

            if smallest != index {
                self.swap_slots(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    fn grow_if_full(&mut self) {
        let current = self.data.capacity();
        if self.data.len() < current {
            return;
        }
        let target = self.policy.grown(current);
        trace!("growing heap storage from {} to {} slots", current, target);
        self.data.reserve_exact(target - self.data.len());
        self.index.reserve(target - self.index.len());
    }

    fn shrink_if_sparse(&mut self) {
        let current = self.data.capacity();
        if let Some(target) = self.policy.shrunk(self.data.len(), current) {
            trace!("shrinking heap storage from {} to {} slots", current, target);
            self.data.shrink_to(target);
            self.index.shrink_to(target);
        }
    }
}

impl<E, V, S: Default> Default for IndexedMinHeap<E, V, S> {
    fn default() -> Self {
        Self::with_policy_and_hasher(CapacityPolicy::default(), S::default())
    }
}

impl<E: fmt::Debug, V: fmt::Debug, S> fmt::Debug for IndexedMinHeap<E, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("entries", &self.data)
            .field("capacity", &self.data.capacity())
            .finish()
    }
}

impl<E, V, S> PriorityQueue<E, V> for IndexedMinHeap<E, V, S>
where
    E: Eq + Hash + Clone,
    V: PartialOrd,
    S: BuildHasher,
{
    fn enqueue(&mut self, element: E, value: V) -> Result<()> {
        IndexedMinHeap::enqueue(self, element, value)
    }

    fn dequeue(&mut self) -> Result<(E, V)> {
        IndexedMinHeap::dequeue(self)
    }

    fn peek_min(&self) -> Result<(&E, &V)> {
        IndexedMinHeap::peek_min(self)
    }

    fn is_empty(&self) -> bool {
        IndexedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }
}

impl<E, V, S> UpdatablePriorityQueue<E, V> for IndexedMinHeap<E, V, S>
where
    E: Eq + Hash + Clone,
    V: PartialOrd,
    S: BuildHasher,
{
    fn update(&mut self, element: &E, value: V) -> Result<bool> {
        IndexedMinHeap::update(self, element, value)
    }

    fn contains(&self, element: &E) -> bool {
        IndexedMinHeap::contains(self, element)
    }
}
