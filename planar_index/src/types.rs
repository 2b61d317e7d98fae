// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt;

/// A point in the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite. Non-finite points cannot be stored.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Self) -> f64 {
        sqrt(self.distance_squared_to(other))
    }

    /// A comparator ordering points by their distance to `self`, nearest first.
    ///
    /// ```rust
    /// use planar_index::Point2D;
    ///
    /// let origin = Point2D::new(0.0, 0.0);
    /// let mut pts = [Point2D::new(3.0, 4.0), Point2D::new(1.0, 0.0)];
    /// pts.sort_by(origin.distance_order());
    /// assert_eq!(pts[0], Point2D::new(1.0, 0.0));
    /// ```
    pub fn distance_order(self) -> impl Fn(&Self, &Self) -> Ordering {
        move |a: &Self, b: &Self| {
            a.distance_squared_to(self)
                .total_cmp(&b.distance_squared_to(self))
        }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle with closed bounds.
///
/// Extents may be infinite; [`Rect::UNBOUNDED`] covers the whole plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (bottom)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (top)
    pub max_y: f64,
}

impl Rect {
    /// The whole plane.
    pub const UNBOUNDED: Self = Self::new(
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::INFINITY,
    );

    /// Create a new rectangle from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// True if any extent is NaN.
    pub fn has_nan(&self) -> bool {
        self.min_x.is_nan() || self.min_y.is_nan() || self.max_x.is_nan() || self.max_y.is_nan()
    }

    /// Whether this rectangle contains the point, boundary included.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether the two rectangles share at least one point, boundary included.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.max_x >= other.min_x
            && self.max_y >= other.min_y
            && other.max_x >= self.min_x
            && other.max_y >= self.min_y
    }

    /// Squared distance from the closest point of this rectangle to `p`; zero inside.
    ///
    /// Only finite differences are formed, so infinite extents are fine.
    #[inline]
    pub fn distance_squared_to(&self, p: Point2D) -> f64 {
        let dx = gap(p.x, self.min_x, self.max_x);
        let dy = gap(p.y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Distance from the closest point of this rectangle to `p`; zero inside.
    pub fn distance_to(&self, p: Point2D) -> f64 {
        sqrt(self.distance_squared_to(p))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

#[inline]
fn gap(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        v - min
    } else if v > max {
        v - max
    } else {
        0.0
    }
}

// `f64::sqrt` lives in std; Newton's iteration keeps the crate no_std without libm.
fn sqrt(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        if v.is_nan() || v <= 0.0 || v.is_infinite() {
            return v;
        }
        // Start above the root so the iteration decreases monotonically.
        let mut x = if v > 1.0 { v } else { 1.0 };
        loop {
            let next = 0.5 * (x + v / x);
            if next >= x {
                return x;
            }
            x = next;
        }
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_conv {
    use super::{Point2D, Rect};

    impl From<kurbo::Point> for Point2D {
        fn from(p: kurbo::Point) -> Self {
            Self::new(p.x, p.y)
        }
    }

    impl From<Point2D> for kurbo::Point {
        fn from(p: Point2D) -> Self {
            Self::new(p.x, p.y)
        }
    }

    impl From<kurbo::Rect> for Rect {
        /// Kurbo rectangles may have negative width or height; normalize first.
        fn from(r: kurbo::Rect) -> Self {
            let r = r.abs();
            Self::new(r.x0, r.y0, r.x1, r.y1)
        }
    }
}
