// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Planar Index: put, overwrite, range, nearest, and k-nearest.

use planar_index::{Index, IndexError, Point2D, Rect};

fn main() -> Result<(), IndexError> {
    let mut idx: Index<&str> = Index::new();
    idx.put(Point2D::new(0.2, 0.3), "a")?;
    idx.put(Point2D::new(0.4, 0.7), "b")?;
    idx.put(Point2D::new(0.9, 0.6), "c")?;

    // Same coordinate: the value is replaced, the size is unchanged.
    let old = idx.put(Point2D::new(0.4, 0.7), "B")?;
    println!("replaced {old:?}; size = {}", idx.len());

    let hits: Vec<_> = idx.range(Rect::new(0.0, 0.0, 0.5, 1.0))?.collect();
    println!("points in [0, 0.5] x [0, 1]: {hits:?}");

    let q = Point2D::new(0.41, 0.71);
    println!("nearest to {q}: {:?}", idx.nearest(q)?);
    println!("two nearest to {q}: {:?}", idx.nearest_k(q, 2)?);
    Ok(())
}
