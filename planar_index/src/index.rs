// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;

use crate::backend::Backend;
use crate::backends::brute::BruteForce;
use crate::backends::kdtree::KdTree;
use crate::error::IndexError;
use crate::types::{Point2D, Rect};

/// A point index parameterized by a backend, with argument validation.
///
/// Every fallible method checks its geometric arguments first and returns
/// [`IndexError::InvalidArgument`] without touching the backend when a point
/// has a non-finite coordinate or a rectangle has a NaN extent.
pub struct IndexGeneric<V, B: Backend<V>> {
    backend: B,
    _v: PhantomData<V>,
}

impl<V, B> IndexGeneric<V, B>
where
    B: Backend<V> + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<V, B: Backend<V>> IndexGeneric<V, B> {
    /// Wrap an existing backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            _v: PhantomData,
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwrap into the underlying backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Number of distinct points stored.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Associate `value` with `point`. Returns the value previously stored at
    /// `point`, if any; the number of points only grows for new points.
    pub fn put(&mut self, point: Point2D, value: V) -> Result<Option<V>, IndexError> {
        check_point("point", point)?;
        Ok(self.backend.put(point, value))
    }

    /// Value stored at exactly `point`.
    pub fn get(&self, point: Point2D) -> Result<Option<&V>, IndexError> {
        check_point("point", point)?;
        Ok(self.backend.get(point))
    }

    /// Whether a value is stored at exactly `point`.
    pub fn contains(&self, point: Point2D) -> Result<bool, IndexError> {
        check_point("point", point)?;
        Ok(self.backend.contains(point))
    }

    /// Every stored point, each exactly once. Each call starts a fresh traversal.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.backend.points()
    }

    /// Every stored point with its value.
    pub fn iter(&self) -> impl Iterator<Item = (Point2D, &V)> + '_ {
        self.backend.iter()
    }

    /// Stored points inside `rect`, boundary included, in no particular order.
    ///
    /// A rectangle with `min > max` on either axis contains nothing.
    pub fn range(&self, rect: Rect) -> Result<impl Iterator<Item = Point2D> + '_, IndexError> {
        if rect.has_nan() {
            tracing::debug!(?rect, "rejecting range query");
            return Err(IndexError::unset_rect("rect"));
        }
        Ok(self.backend.range(rect))
    }

    /// The stored point closest to `point`, excluding `point` itself.
    ///
    /// `None` when the index is empty or holds only `point`. Ties resolve to
    /// any one of the equidistant points.
    pub fn nearest(&self, point: Point2D) -> Result<Option<Point2D>, IndexError> {
        check_point("point", point)?;
        Ok(self.backend.nearest(point))
    }

    /// Up to `k` stored points closest to `point`, excluding `point` itself.
    pub fn nearest_k(&self, point: Point2D, k: usize) -> Result<Vec<Point2D>, IndexError> {
        check_point("point", point)?;
        Ok(self.backend.nearest_k(point, k))
    }
}

fn check_point(name: &'static str, point: Point2D) -> Result<(), IndexError> {
    if point.is_finite() {
        Ok(())
    } else {
        tracing::debug!(name, ?point, "rejecting non-finite point");
        Err(IndexError::unset_point(name))
    }
}

impl<V, B: Backend<V> + Debug> Debug for IndexGeneric<V, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexGeneric")
            .field("backend", &self.backend)
            .finish()
    }
}

/// Default index backed by a 2D-tree.
pub type Index<V> = IndexGeneric<V, KdTree<V>>;

/// Index backed by linear scans; the reference the 2D-tree is tested against.
pub type BruteForceIndex<V> = IndexGeneric<V, BruteForce<V>>;

impl<V, B: Backend<V> + Default> Default for IndexGeneric<V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<V> {
    /// Create an index backed by linear scans.
    pub fn brute_force() -> BruteForceIndex<V> {
        IndexGeneric::new()
    }
}
