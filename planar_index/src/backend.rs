// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for point index implementations.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{Point2D, Rect};

/// Point-keyed symbol table abstraction used by `IndexGeneric`.
///
/// Backends trust their arguments: points are finite and rectangles are free
/// of NaN. [`IndexGeneric`](crate::IndexGeneric) checks this before delegating.
pub trait Backend<V> {
    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// True if no points are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Associate `value` with `point`, returning the value it replaces.
    fn put(&mut self, point: Point2D, value: V) -> Option<V>;

    /// Value stored at exactly `point`.
    fn get(&self, point: Point2D) -> Option<&V>;

    /// Whether a value is stored at exactly `point`.
    fn contains(&self, point: Point2D) -> bool {
        self.get(point).is_some()
    }

    /// Every stored point with its value, each exactly once.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (Point2D, &'a V)> + 'a>;

    /// Every stored point, each exactly once.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point2D> + 'a>
    where
        V: 'a,
    {
        Box::new(self.iter().map(|(p, _)| p))
    }

    /// Stored points inside `rect` (closed bounds), in no particular order.
    fn range<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = Point2D> + 'a>;

    /// The stored point closest to `point`, other than `point` itself.
    fn nearest(&self, point: Point2D) -> Option<Point2D>;

    /// Up to `k` stored points closest to `point`, other than `point` itself,
    /// in no particular order.
    fn nearest_k(&self, point: Point2D, k: usize) -> Vec<Point2D>;
}
