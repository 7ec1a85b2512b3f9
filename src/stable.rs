//! FIFO tie-breaking on top of [`IndexedMinHeap`]
//!
//! [`StableIndexedMinHeap`] pairs every value with a monotonically increasing
//! sequence number, so among equal values the entry enqueued (or last updated)
//! first is dequeued first. An update takes a fresh sequence number and thus
//! behaves exactly like removing the element and enqueueing it again.
//!
//! ```rust
//! use indexed_min_heap::StableIndexedMinHeap;
//!
//! let mut queue = StableIndexedMinHeap::new();
//! queue.enqueue("first", 1).unwrap();
//! queue.enqueue("second", 1).unwrap();
//! queue.enqueue("third", 1).unwrap();
//!
//! assert_eq!(queue.dequeue(), Ok(("first", 1)));
//! assert_eq!(queue.dequeue(), Ok(("second", 1)));
//! assert_eq!(queue.dequeue(), Ok(("third", 1)));
//! ```

use crate::capacity::CapacityPolicy;
use crate::indexed::IndexedMinHeap;
use crate::traits::{PriorityQueue, Result, UpdatablePriorityQueue};
use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A value tagged with the order in which it entered the queue
///
/// Orders by value first and sequence number second. Values that are not
/// comparable with themselves stay incomparable, so they are still rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequenced<V> {
    value: V,
    seq: u64,
}

impl<V> Sequenced<V> {
    /// Returns the wrapped value
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: PartialOrd> PartialOrd for Sequenced<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.partial_cmp(&other.value)? {
            Ordering::Equal => Some(self.seq.cmp(&other.seq)),
            ordering => Some(ordering),
        }
    }
}

/// An [`IndexedMinHeap`] that dequeues equal values in FIFO order
#[derive(Clone)]
pub struct StableIndexedMinHeap<E, V, S = FxBuildHasher> {
    inner: IndexedMinHeap<E, Sequenced<V>, S>,
    next_seq: u64,
}

impl<E, V> StableIndexedMinHeap<E, V> {
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

impl<E, V, S> StableIndexedMinHeap<E, V, S> {
    /// Creates an empty queue configured by `policy`, indexing with `hasher`
    pub fn with_policy_and_hasher(policy: CapacityPolicy, hasher: S) -> Self {
        Self {
            inner: IndexedMinHeap::with_policy_and_hasher(policy, hasher),
            next_seq: 0,
        }
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of heap slots currently allocated
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the capacity policy this queue was built with
    pub fn policy(&self) -> &CapacityPolicy {
        self.inner.policy()
    }

    /// Iterates over all entries in heap order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = (&E, &V)> + '_ {
        self.inner.iter().map(|(element, tagged)| (element, &tagged.value))
    }

    /// Removes every entry, keeping the allocated capacity
    ///
    /// The sequence counter keeps running, so ties between entries enqueued
    /// after a clear still resolve in arrival order.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Pairs `value` with the next sequence number without consuming it
    fn tagged(&self, value: V) -> Sequenced<V> {
        Sequenced {
            value,
            seq: self.next_seq,
        }
    }
}

impl<E, V, S> StableIndexedMinHeap<E, V, S>
where
    E: Eq + Hash + Clone,
    V: PartialOrd,
    S: BuildHasher,
{
    /// See [`IndexedMinHeap::enqueue`]
    pub fn enqueue(&mut self, element: E, value: V) -> Result<()> {
        let tagged = self.tagged(value);
        self.inner.enqueue(element, tagged)?;
        self.next_seq += 1;
        Ok(())
    }

    /// See [`IndexedMinHeap::dequeue`]
    pub fn dequeue(&mut self) -> Result<(E, V)> {
        let (element, tagged) = self.inner.dequeue()?;
        Ok((element, tagged.value))
    }

    /// See [`IndexedMinHeap::peek_min`]
    pub fn peek_min(&self) -> Result<(&E, &V)> {
        let (element, tagged) = self.inner.peek_min()?;
        Ok((element, &tagged.value))
    }

    /// See [`IndexedMinHeap::update`]; the element moves behind any entries
    /// already holding an equal value
    pub fn update<Q>(&mut self, element: &Q, value: V) -> Result<bool>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let tagged = self.tagged(value);
        let updated = self.inner.update(element, tagged)?;
        if updated {
            self.next_seq += 1;
        }
        Ok(updated)
    }

    /// See [`IndexedMinHeap::enqueue_or_update`]; either way the element
    /// lines up behind entries already holding an equal value
    pub fn enqueue_or_update(&mut self, element: E, value: V) -> Result<bool> {
        let tagged = self.tagged(value);
        let inserted = self.inner.enqueue_or_update(element, tagged)?;
        self.next_seq += 1;
        Ok(inserted)
    }

    /// Returns true if `element` is currently queued
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Returns the current value of `element`, if queued
    pub fn get<Q>(&self, element: &Q) -> Option<&V>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(element).map(Sequenced::value)
    }

    /// Removes `element` from anywhere in the queue
    pub fn remove<Q>(&mut self, element: &Q) -> Option<(E, V)>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner
            .remove(element)
            .map(|(element, tagged)| (element, tagged.value))
    }

    /// Consumes the queue, returning its entries in dequeue order
    pub fn into_sorted_vec(self) -> Vec<(E, V)> {
        self.inner
            .into_sorted_vec()
            .into_iter()
            .map(|(element, tagged)| (element, tagged.value))
            .collect()
    }

    /// See [`IndexedMinHeap::verify_invariants`]
    pub fn verify_invariants(&self) -> bool {
        self.inner.verify_invariants()
    }
}

impl<E: fmt::Debug, V: fmt::Debug, S> fmt::Debug for StableIndexedMinHeap<E, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableIndexedMinHeap")
            .field("inner", &self.inner)
            .field("next_seq", &self.next_seq)
            .finish()
    }
}

impl<E, V, S: Default> Default for StableIndexedMinHeap<E, V, S> {
    fn default() -> Self {
        Self::with_policy_and_hasher(CapacityPolicy::default(), S::default())
    }
}

impl<E, V, S> PriorityQueue<E, V> for StableIndexedMinHeap<E, V, S>
where
    E: Eq + Hash + Clone,
    V: PartialOrd,
    S: BuildHasher,
{
    fn enqueue(&mut self, element: E, value: V) -> Result<()> {
        StableIndexedMinHeap::enqueue(self, element, value)
    }

    fn dequeue(&mut self) -> Result<(E, V)> {
        StableIndexedMinHeap::dequeue(self)
    }

    fn peek_min(&self) -> Result<(&E, &V)> {
        StableIndexedMinHeap::peek_min(self)
    }

    fn is_empty(&self) -> bool {
        StableIndexedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        StableIndexedMinHeap::len(self)
    }
}

impl<E, V, S> UpdatablePriorityQueue<E, V> for StableIndexedMinHeap<E, V, S>
where
    E: Eq + Hash + Clone,
    V: PartialOrd,
    S: BuildHasher,
{
    fn update(&mut self, element: &E, value: V) -> Result<bool> {
        StableIndexedMinHeap::update(self, element, value)
    }

    fn contains(&self, element: &E) -> bool {
        StableIndexedMinHeap::contains(self, element)
    }
}
