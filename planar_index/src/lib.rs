// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Index: a 2D-tree point index.
//!
//! Planar Index maps points in the plane to values and answers spatial queries.
//!
//! - Insert or overwrite a value at a point, look points up exactly.
//! - Query every point inside an axis-aligned rectangle.
//! - Find the nearest point, or the `k` nearest points, to a query point.
//!
//! The default backend is a 2D-tree: a binary tree splitting on x at even depths and
//! on y at odd depths, where every node owns the rectangle of the plane below it.
//! Range and nearest-neighbor search use those rectangles to skip whole subtrees.
//! A brute-force backend implements the same [`Backend`] contract with linear scans
//! and serves as a reference.
//!
//! # Example
//!
//! ```rust
//! use planar_index::{Index, Point2D, Rect};
//!
//! let mut idx: Index<u32> = Index::new();
//! idx.put(Point2D::new(0.2, 0.3), 0)?;
//! idx.put(Point2D::new(0.4, 0.7), 1)?;
//! idx.put(Point2D::new(0.9, 0.6), 2)?;
//!
//! assert_eq!(idx.get(Point2D::new(0.4, 0.7))?, Some(&1));
//! assert_eq!(idx.nearest(Point2D::new(0.41, 0.71))?, Some(Point2D::new(0.4, 0.7)));
//! assert_eq!(idx.range(Rect::new(0.0, 0.0, 0.5, 1.0))?.count(), 2);
//! assert_eq!(idx.nearest_k(Point2D::new(0.0, 0.0), 2)?.len(), 2);
//! # Ok::<(), planar_index::IndexError>(())
//! ```
//!
//! ## Choosing a backend
//!
//! - `KdTree` (default): insertion and lookup cost is proportional to tree height,
//!   O(log n) for random insertion order. The tree is never rebalanced, so sorted
//!   input degrades to O(n); shuffle bulk loads if that matters.
//! - `BruteForce`: every operation is a linear scan. Useful as an oracle in tests
//!   and as a baseline in benchmarks.
//!
//! ### Float semantics
//!
//! Stored and queried points must have finite coordinates; rectangles may have
//! infinite extents but not NaN ones. The validated [`IndexGeneric`] API returns
//! [`IndexError::InvalidArgument`] otherwise. Backends used directly trust their input.
//!
//! ### Features
//!
//! - `std` (default): use `std` in dependencies.
//! - `libm`: `no_std` float support for kurbo.
//! - `kurbo`: `From` conversions for `kurbo::Point` and `kurbo::Rect`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod backends;
pub mod error;
pub mod index;
pub mod queue;
pub mod types;

pub use backend::Backend;
pub use backends::brute::BruteForce;
pub use backends::kdtree::KdTree;
pub use error::IndexError;
pub use index::{BruteForceIndex, Index, IndexGeneric};
pub use queue::BoundedMaxQueue;
pub use types::{Point2D, Rect};
