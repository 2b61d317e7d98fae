// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations of the point index contract.
//!
//! - `kdtree`: 2D-tree with rectangle-pruned range and nearest-neighbor search.
//! - `brute`: flat vector with linear scans; the correctness oracle.
//!
//! Pruning note
//! ------------
//! Every 2D-tree node owns the rectangle its subtree covers. For a query point `q`
//! the squared distance from `q` to that rectangle is a lower bound on the squared
//! distance to any point below the node, so a subtree is skipped when
//!
//! `dist²(q, region) > bound`
//!
//! where `bound` is the best distance found so far (nearest) or the farthest of the
//! k retained candidates once k are held (k-nearest). Range search keeps only
//! subtrees whose region intersects the query rectangle.

pub mod brute;
pub mod kdtree;
