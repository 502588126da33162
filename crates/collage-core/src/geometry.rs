//! Geometric primitives for collage layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout Collage
//! for calculating positions, sizes, and bounding boxes of placed images.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Collage uses a coordinate system consistent with SVG and the browser canvas:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the canvas at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Coordinates are `f64` so that layouts computed here match layouts saved by
//! earlier sessions bit for bit.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in canvas coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collage_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Width and height of a canvas or an image.
///
/// # Examples
///
/// ```
/// # use collage_core::geometry::Size;
/// let container = Size::new(1200.0, 800.0);
/// assert_eq!(container.min_side(), 800.0);
/// assert_eq!(container.aspect_ratio(), 1.5);
///
/// // A 4px border on every side leaves the drawable area
/// let inner = container.shrink(4.0);
/// assert_eq!(inner, Size::new(1192.0, 792.0));
/// assert!(inner.is_positive());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the shorter of the two sides.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Returns `width / height`.
    ///
    /// A zero height yields an infinite or NaN ratio; callers validate first.
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    /// Returns the length of the diagonal.
    pub fn diagonal(self) -> f64 {
        (self.width.powi(2) + self.height.powi(2)).sqrt()
    }

    /// Returns true when both sides are finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Shrinks both dimensions by `amount` on every side.
    pub fn shrink(self, amount: f64) -> Self {
        Self {
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }
}

/// An axis-aligned box given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f64..5000.0, 1.0f64..5000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    fn border_strategy() -> impl Strategy<Value = f64> {
        0.0f64..100.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Shrinking takes `2 * amount` off each side, and the result stays
    /// positive exactly while the short side is wider than both borders.
    fn check_shrink(size: Size, amount: f64) -> Result<(), TestCaseError> {
        let inner = size.shrink(amount);

        prop_assert!(approx_eq!(f64, size.width() - inner.width(), 2.0 * amount, epsilon = 1e-9));
        prop_assert!(approx_eq!(f64, size.height() - inner.height(), 2.0 * amount, epsilon = 1e-9));
        prop_assert_eq!(inner.is_positive(), size.min_side() > 2.0 * amount);
        Ok(())
    }

    /// The aspect ratio maps height onto width, and the short side and
    /// diagonal bracket both sides.
    fn check_aspect_ratio(size: Size) -> Result<(), TestCaseError> {
        let ratio = size.aspect_ratio();

        prop_assert!(ratio.is_finite() && ratio > 0.0);
        prop_assert!(approx_eq!(f64, size.height() * ratio, size.width(), epsilon = 1e-6));
        prop_assert!(size.min_side() <= size.width() && size.min_side() <= size.height());
        prop_assert!(size.diagonal() >= size.width().max(size.height()));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn shrink_removes_border(size in size_strategy(), amount in border_strategy()) {
            check_shrink(size, amount)?;
        }

        #[test]
        fn aspect_ratio_matches_sides(size in size_strategy()) {
            check_aspect_ratio(size)?;
        }
    }
}
