//! Placement rectangles produced by the layout engine.
//!
//! A [`Placement`] is the base geometry assigned to one image: an axis-aligned
//! box in canvas coordinates plus an optional rotation (degrees, clockwise,
//! about the box center). It is the wire shape persisted next to projects and
//! consumed by renderers, so it serializes as
//! `{ "x", "y", "width", "height", "rotation"? }`.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rotation: Option<f64>,
}

impl Placement {
    /// Creates an unrotated placement from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: None,
        }
    }

    /// Creates an unrotated placement centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(
            center.x() - size.width() / 2.0,
            center.y() - size.height() / 2.0,
            size.width(),
            size.height(),
        )
    }

    /// Sets the rotation in degrees (builder style).
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation in degrees, if the layout assigned one.
    pub fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center of the box, the pivot for rotation.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Unrotated bounding box.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.origin(), self.size())
    }

    /// Returns true when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.rotation.is_none_or(f64::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_accessors() {
        let placement = Placement::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(placement.origin(), Point::new(10.0, 20.0));
        assert_eq!(placement.size(), Size::new(30.0, 40.0));
        assert_eq!(placement.center(), Point::new(25.0, 40.0));
        assert_eq!(placement.rotation(), None);
    }

    #[test]
    fn test_placement_centered() {
        let placement = Placement::centered(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(placement.x(), 40.0);
        assert_eq!(placement.y(), 45.0);
        assert_eq!(placement.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_placement_with_rotation() {
        let placement = Placement::new(0.0, 0.0, 1.0, 1.0).with_rotation(-12.5);
        assert_eq!(placement.rotation(), Some(-12.5));
    }

    #[test]
    fn test_placement_is_finite() {
        assert!(Placement::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Placement::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Placement::new(0.0, 0.0, 1.0, 1.0)
            .with_rotation(f64::INFINITY)
            .is_finite());
    }
}
