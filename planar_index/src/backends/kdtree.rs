// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D-tree backend: a k-d tree over the plane with alternating x/y splits.
//!
//! Each node owns the rectangle of the plane its subtree covers. The root
//! covers everything; a child covers its parent's rectangle clipped at the
//! parent's point on the splitting axis. Range search skips subtrees whose
//! rectangle misses the query, and nearest-neighbor search skips subtrees
//! whose rectangle is farther than the current bound.
//!
//! The shape depends only on insertion order; nothing is rebalanced. All
//! traversals use explicit stacks, so a degenerate tree (e.g. from sorted
//! input) costs time but never call-stack depth.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

use crate::backend::Backend;
use crate::queue::BoundedMaxQueue;
use crate::types::{Point2D, Rect};

/// 2D-tree mapping points to values.
pub struct KdTree<V> {
    root: Link<V>,
    len: usize,
}

type Link<V> = Option<Box<Node<V>>>;

struct Node<V> {
    point: Point2D,
    value: V,
    region: Rect,
    left_bottom: Link<V>,
    right_top: Link<V>,
}

/// Splitting axis. Derived from depth while descending, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    const ROOT: Self = Self::X;

    #[inline]
    fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    #[inline]
    fn coord(self, p: Point2D) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// `region` cut at `at`: (left/bottom half, right/top half).
    fn split(self, region: Rect, at: f64) -> (Rect, Rect) {
        match self {
            Self::X => (
                Rect {
                    max_x: at,
                    ..region
                },
                Rect {
                    min_x: at,
                    ..region
                },
            ),
            Self::Y => (
                Rect {
                    max_y: at,
                    ..region
                },
                Rect {
                    min_y: at,
                    ..region
                },
            ),
        }
    }
}

impl<V> Node<V> {
    fn new(point: Point2D, value: V, region: Rect) -> Self {
        Self {
            point,
            value,
            region,
            left_bottom: None,
            right_top: None,
        }
    }

    /// Whether `p` belongs under `left_bottom` when this node splits on `axis`.
    #[inline]
    fn is_lower(&self, axis: Axis, p: Point2D) -> bool {
        axis.coord(p) < axis.coord(self.point)
    }

    /// Children ordered (near, far) relative to `query`.
    fn near_far(&self, axis: Axis, query: Point2D) -> (Option<&Self>, Option<&Self>) {
        let lb = self.left_bottom.as_deref();
        let rt = self.right_top.as_deref();
        if self.is_lower(axis, query) {
            (lb, rt)
        } else {
            (rt, lb)
        }
    }
}

impl<V> Default for KdTree<V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<V> KdTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels: 0 when empty, 1 for a lone root.
    ///
    /// Equals `len()` when points arrived sorted along both axes.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<V>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            for child in [node.left_bottom.as_deref(), node.right_top.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, level + 1));
            }
        }
        height
    }

    /// Breadth-first iterator over stored points and values.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<V> Backend<V> for KdTree<V> {
    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, point: Point2D, value: V) -> Option<V> {
        let mut link = &mut self.root;
        let mut region = Rect::UNBOUNDED;
        let mut axis = Axis::ROOT;
        let mut depth = 0_usize;
        while let Some(node) = link {
            if node.point == point {
                tracing::trace!(%point, depth, "replacing value");
                return Some(mem::replace(&mut node.value, value));
            }
            let (lower, upper) = axis.split(node.region, axis.coord(node.point));
            if node.is_lower(axis, point) {
                region = lower;
                link = &mut node.left_bottom;
            } else {
                region = upper;
                link = &mut node.right_top;
            }
            axis = axis.flip();
            depth += 1;
        }
        tracing::trace!(%point, depth, "new node");
        *link = Some(Box::new(Node::new(point, value, region)));
        self.len += 1;
        None
    }

    fn get(&self, point: Point2D) -> Option<&V> {
        let mut link = self.root.as_deref();
        let mut axis = Axis::ROOT;
        while let Some(node) = link {
            if node.point == point {
                return Some(&node.value);
            }
            link = if node.is_lower(axis, point) {
                node.left_bottom.as_deref()
            } else {
                node.right_top.as_deref()
            };
            axis = axis.flip();
        }
        None
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (Point2D, &'a V)> + 'a> {
        Box::new(Self::iter(self))
    }

    fn range<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = Point2D> + 'a> {
        let mut out = Vec::new();
        let Some(root) = self.root.as_deref() else {
            return Box::new(out.into_iter());
        };
        let (mut visited, mut pruned) = (0_usize, 0_usize);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !node.region.intersects(&rect) {
                pruned += 1;
                continue;
            }
            visited += 1;
            if rect.contains(node.point) {
                out.push(node.point);
            }
            stack.extend(node.right_top.as_deref());
            stack.extend(node.left_bottom.as_deref());
        }
        tracing::debug!(%rect, visited, pruned, hits = out.len(), "range query");
        Box::new(out.into_iter())
    }

    fn nearest(&self, query: Point2D) -> Option<Point2D> {
        let root = self.root.as_deref()?;
        let mut best = None;
        let mut best_dist_sq = f64::INFINITY;
        let (mut visited, mut pruned) = (0_usize, 0_usize);
        let mut stack = vec![(root, Axis::ROOT)];
        while let Some((node, axis)) = stack.pop() {
            if node.region.distance_squared_to(query) > best_dist_sq {
                pruned += 1;
                continue;
            }
            visited += 1;
            if node.point != query {
                let d = node.point.distance_squared_to(query);
                // Squared distances may overflow to infinity; the first point still counts.
                if best.is_none() || d < best_dist_sq {
                    best = Some(node.point);
                    best_dist_sq = d;
                }
            }
            // Far goes on the stack first so the near subtree is exhausted before it.
            let (near, far) = node.near_far(axis, query);
            stack.extend(far.map(|n| (n, axis.flip())));
            stack.extend(near.map(|n| (n, axis.flip())));
        }
        tracing::debug!(%query, visited, pruned, found = best.is_some(), "nearest query");
        best
    }

    fn nearest_k(&self, query: Point2D, k: usize) -> Vec<Point2D> {
        let Some(root) = self.root.as_deref() else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }
        let mut candidates = BoundedMaxQueue::new(k);
        let (mut visited, mut pruned) = (0_usize, 0_usize);
        let mut stack = vec![(root, Axis::ROOT)];
        while let Some((node, axis)) = stack.pop() {
            // Until k candidates are held nothing can be pruned.
            let bound = match candidates.peek_worst() {
                Some((worst, _)) if candidates.is_full() => worst,
                _ => f64::INFINITY,
            };
            if node.region.distance_squared_to(query) > bound {
                pruned += 1;
                continue;
            }
            visited += 1;
            if node.point != query {
                let d = node.point.distance_squared_to(query);
                if !candidates.is_full() || d < bound {
                    let _ = candidates.push(d, node.point);
                }
            }
            let (near, far) = node.near_far(axis, query);
            stack.extend(far.map(|n| (n, axis.flip())));
            stack.extend(near.map(|n| (n, axis.flip())));
        }
        tracing::debug!(%query, k, visited, pruned, found = candidates.len(), "k-nearest query");
        candidates.into_sorted_vec()
    }
}

impl<V> Drop for KdTree<V> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop is as deep as the tree.
        let mut stack: Vec<Box<Node<V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left_bottom.take());
            stack.extend(node.right_top.take());
        }
    }
}

impl<V> Debug for KdTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Breadth-first iterator over a [`KdTree`], created by [`KdTree::iter`].
pub struct Iter<'a, V> {
    queue: VecDeque<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Point2D, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left_bottom.as_deref());
        self.queue.extend(node.right_top.as_deref());
        Some((node.point, &node.value))
    }
}

impl<V> Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl<V> FromIterator<(Point2D, V)> for KdTree<V> {
    /// Later duplicates overwrite earlier values.
    fn from_iter<I: IntoIterator<Item = (Point2D, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<V> Extend<(Point2D, V)> for KdTree<V> {
    fn extend<I: IntoIterator<Item = (Point2D, V)>>(&mut self, iter: I) {
        for (p, v) in iter {
            let _ = self.put(p, v);
        }
    }
}
