//! Stress tests that push the queues through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use indexed_min_heap::{CapacityPolicy, IndexedMinHeap, QueueError, StableIndexedMinHeap};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::thread;

/// Test massive numbers of enqueues and dequeues
#[test]
fn test_massive_operations() {
    let mut queue = IndexedMinHeap::new();

    for i in 0..10_000 {
        queue.enqueue(i, i).unwrap();
    }
    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.dequeue(), Ok((i, i)));
    }
    assert!(queue.is_empty());
}

/// Test many updates in both directions
#[test]
fn test_many_updates() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut queue = IndexedMinHeap::new();
    let mut values = vec![0i64; 2_000];

    for (element, value) in values.iter_mut().enumerate() {
        *value = rng.gen_range(0..1_000_000);
        queue.enqueue(element, *value).unwrap();
    }

    for _ in 0..20_000 {
        let element = rng.gen_range(0..values.len());
        let value = rng.gen_range(0..1_000_000);
        assert_eq!(queue.update(&element, value), Ok(true));
        values[element] = value;
    }
    assert!(queue.verify_invariants());

    let mut expected = values.clone();
    expected.sort();
    let drained: Vec<i64> = queue.into_sorted_vec().into_iter().map(|(_, v)| v).collect();
    assert_eq!(drained, expected);
}

/// Test interleaved enqueue / dequeue / update / remove with a shrinking policy
#[test]
fn test_mixed_workload_with_shrink() {
    // RUST_LOG=trace shows every grow/shrink of the heap storage
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(7);
    let policy = CapacityPolicy::new().with_initial_capacity(8).with_shrink(true);
    let mut queue = IndexedMinHeap::with_policy(policy);
    let mut next_element = 0u64;

    for round in 0..20_000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                queue.enqueue(next_element, rng.gen_range(-500i32..500)).unwrap();
                next_element += 1;
            }
            4..=5 => {
                let _ = queue.dequeue();
            }
            6..=8 => {
                let element = rng.gen_range(0..next_element.max(1));
                let _ = queue.update(&element, rng.gen_range(-500..500)).unwrap();
            }
            _ => {
                let element = rng.gen_range(0..next_element.max(1));
                let _ = queue.remove(&element);
            }
        }
        if round % 500 == 0 {
            assert!(queue.verify_invariants(), "invariants broken at round {}", round);
        }
    }

    while !queue.is_empty() {
        queue.dequeue().unwrap();
    }
    assert!(queue.capacity() >= 8);
    assert!(queue.capacity() < 64);
    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
}

/// Test alternating insert and dequeue keeps the minimum correct
#[test]
fn test_alternating_ops() {
    let mut queue = IndexedMinHeap::new();

    for i in 0..2_000 {
        queue.enqueue(2 * i, i * 2).unwrap();
        queue.enqueue(2 * i + 1, i * 2 + 1).unwrap();
        assert_eq!(queue.dequeue(), Ok((i, i)));
    }
    assert_eq!(queue.len(), 2_000);
    assert!(queue.verify_invariants());
}

/// Test a Dijkstra-style frontier on a generated grid
#[test]
fn test_grid_frontier() {
    const SIDE: usize = 60;
    let mut rng = StdRng::seed_from_u64(99);
    let weights: Vec<u64> = (0..SIDE * SIDE).map(|_| rng.gen_range(1..10)).collect();

    let mut dist = vec![u64::MAX; SIDE * SIDE];
    let mut frontier = StableIndexedMinHeap::new();
    dist[0] = 0;
    frontier.enqueue(0usize, 0u64).unwrap();

    while let Ok((cell, d)) = frontier.dequeue() {
        let (row, col) = (cell / SIDE, cell % SIDE);
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push(cell - SIDE);
        }
        if row + 1 < SIDE {
            neighbors.push(cell + SIDE);
        }
        if col > 0 {
            neighbors.push(cell - 1);
        }
        if col + 1 < SIDE {
            neighbors.push(cell + 1);
        }

        for next in neighbors {
            let candidate = d + weights[next];
            if candidate < dist[next] {
                dist[next] = candidate;
                if !frontier.update(&next, candidate).unwrap() {
                    frontier.enqueue(next, candidate).unwrap();
                }
            }
        }
    }

    // Every cell reached; a path never costs less than its own final step
    assert!(dist.iter().all(|&d| d != u64::MAX));
    for cell in 1..SIDE * SIDE {
        assert!(dist[cell] >= weights[cell]);
    }
}

/// Test sharing a queue between threads behind an external lock
#[test]
fn test_external_lock() {
    let queue = Arc::new(Mutex::new(IndexedMinHeap::new()));

    let workers: Vec<_> = (0..4u32)
        .map(|worker| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..500u32 {
                    queue.lock().enqueue(worker * 1_000 + i, i).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let mut queue = queue.lock();
    assert_eq!(queue.len(), 2_000);
    assert!(queue.verify_invariants());

    let mut last = 0;
    while let Ok((_, value)) = queue.dequeue() {
        assert!(value >= last);
        last = value;
    }
}
