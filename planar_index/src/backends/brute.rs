// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; the reference
//! answers the 2D-tree is checked against.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Point2D, Rect};

/// Flat vector backend with linear scans.
///
/// Every operation is O(n); points are kept in first-insertion order.
#[derive(Clone)]
pub struct BruteForce<V> {
    entries: Vec<(Point2D, V)>,
}

impl<V> Default for BruteForce<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> BruteForce<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored points other than `query`, nearest first.
    fn others_by_distance(&self, query: Point2D) -> Vec<Point2D> {
        let mut others: Vec<Point2D> = self
            .entries
            .iter()
            .map(|(p, _)| *p)
            .filter(|p| *p != query)
            .collect();
        others.sort_by(query.distance_order());
        others
    }
}

impl<V> Debug for BruteForce<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BruteForce")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<V> Backend<V> for BruteForce<V> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn put(&mut self, point: Point2D, value: V) -> Option<V> {
        if let Some((_, v)) = self.entries.iter_mut().find(|(p, _)| *p == point) {
            return Some(core::mem::replace(v, value));
        }
        self.entries.push((point, value));
        None
    }

    fn get(&self, point: Point2D) -> Option<&V> {
        self.entries
            .iter()
            .find(|(p, _)| *p == point)
            .map(|(_, v)| v)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (Point2D, &'a V)> + 'a> {
        Box::new(self.entries.iter().map(|(p, v)| (*p, v)))
    }

    fn range<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = Point2D> + 'a> {
        let mut out = Vec::new();
        for (p, _) in &self.entries {
            if rect.contains(*p) {
                out.push(*p);
            }
        }
        Box::new(out.into_iter())
    }

    fn nearest(&self, query: Point2D) -> Option<Point2D> {
        self.entries
            .iter()
            .map(|(p, _)| *p)
            .filter(|p| *p != query)
            .min_by(query.distance_order())
    }

    fn nearest_k(&self, query: Point2D, k: usize) -> Vec<Point2D> {
        let mut others = self.others_by_distance(query);
        others.truncate(k);
        others
    }
}
