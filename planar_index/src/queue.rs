// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capacity-bounded max-queue keyed by squared distance.
//!
//! Used by k-nearest search: the farthest retained candidate sits on top, so
//! the pruning bound is a peek away and eviction is a single pop.

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// A priority queue holding at most `capacity` items, farthest first.
#[derive(Clone, Debug)]
pub struct BoundedMaxQueue<T> {
    capacity: usize,
    heap: BinaryHeap<Candidate<T>>,
}

#[derive(Clone, Debug)]
struct Candidate<T> {
    dist_sq: f64,
    item: T,
}

impl<T> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Candidate<T> {}

impl<T> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: larger distance = higher priority
        self.dist_sq.total_cmp(&other.dist_sq)
    }
}

impl<T> BoundedMaxQueue<T> {
    /// Create an empty queue retaining at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // +1: a push may briefly exceed capacity before eviction.
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Maximum number of retained items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no items are retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True once `capacity` items are retained.
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Insert `item` at squared distance `dist_sq`.
    ///
    /// If this takes the queue over capacity the farthest item is evicted and
    /// returned (which may be `item` itself).
    pub fn push(&mut self, dist_sq: f64, item: T) -> Option<(f64, T)> {
        self.heap.push(Candidate { dist_sq, item });
        if self.heap.len() > self.capacity {
            self.pop_worst()
        } else {
            None
        }
    }

    /// The farthest retained item and its squared distance.
    pub fn peek_worst(&self) -> Option<(f64, &T)> {
        self.heap.peek().map(|c| (c.dist_sq, &c.item))
    }

    /// Remove and return the farthest retained item.
    pub fn pop_worst(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|c| (c.dist_sq, c.item))
    }

    /// Consume the queue, yielding items nearest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| c.item)
            .collect()
    }
}
