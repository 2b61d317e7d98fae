// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo interop.
//!
//! Index the vertices of a kurbo path, then query with kurbo geometry.
//!
//! Run:
//! - `cargo run -p planar_demos --example kurbo_points`

use kurbo::{BezPath, PathEl, Point, Rect, Shape};
use planar_index::{Index, Point2D};

fn main() -> Result<(), planar_index::IndexError> {
    // A star: alternate outer and inner vertices.
    let mut path = BezPath::new();
    for i in 0..10 {
        let r = if i % 2 == 0 { 100.0 } else { 40.0 };
        let a = std::f64::consts::TAU * f64::from(i) / 10.0;
        let p = Point::new(r * a.cos(), r * a.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();

    let mut idx: Index<usize> = Index::new();
    for (i, el) in path.elements().iter().enumerate() {
        if let PathEl::MoveTo(p) | PathEl::LineTo(p) = el {
            let _ = idx.put(Point2D::from(*p), i)?;
        }
    }
    println!("indexed {} vertices of a star with bbox {:?}", idx.len(), path.bounding_box());

    // Inner vertices only: a kurbo rect converts directly, corners in any order.
    let inner: Vec<Point> = idx
        .range(Rect::new(50.0, 50.0, -50.0, -50.0).into())?
        .map(Point::from)
        .collect();
    println!("vertices within 50 of the axes: {inner:?}");

    let tip = Point::new(120.0, 0.0);
    if let Some(p) = idx.nearest(tip.into())? {
        println!("closest vertex to {tip:?}: {:?}", Point::from(p));
    }
    let ring: Vec<Point> = idx
        .nearest_k(Point2D::new(0.0, 0.0), 5)?
        .into_iter()
        .map(Point::from)
        .collect();
    println!("five vertices nearest the center: {ring:?}");
    Ok(())
}
