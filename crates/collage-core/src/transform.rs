//! Per-image adjustments layered on top of the computed layout.
//!
//! The layout engine produces base geometry only. Users then pan, zoom, and
//! rotate individual cells; those adjustments live in an [`ImageTransform`]
//! that is persisted with the project and merged into the base
//! [`Placement`] right before rendering.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{geometry::Point, placement::Placement};

/// Smallest zoom factor a cell can be shrunk to.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor a cell can be grown to.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplicative step applied by one zoom gesture.
pub const ZOOM_STEP: f64 = 1.05;

/// Rotation limit, in degrees, in either direction.
pub const MAX_ROTATION: f64 = 180.0;

/// Direction of a single zoom gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// User adjustments to one placed image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTransform {
    pan: Point,
    zoom: f64,
    rotation: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            pan: Point::default(),
            zoom: 1.0,
            rotation: 0.0,
        }
    }
}

impl ImageTransform {
    /// The identity transform: no pan, unit zoom, no rotation.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns true if applying this transform changes nothing.
    pub fn is_identity(&self) -> bool {
        self.pan.is_zero() && self.zoom == 1.0 && self.rotation == 0.0
    }

    /// Sets the pan offset.
    pub fn with_pan(mut self, pan: Point) -> Self {
        self.pan = pan;
        self
    }

    /// Sets the zoom factor, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    /// Sets the rotation in degrees, clamped to ±[`MAX_ROTATION`].
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees.clamp(-MAX_ROTATION, MAX_ROTATION);
        self
    }

    /// Applies one zoom step to the cell whose base geometry is `base`.
    ///
    /// The pan is shifted by half the size change so the cell keeps its
    /// center while growing or shrinking.
    ///
    /// # Examples
    ///
    /// ```
    /// use collage_core::{placement::Placement, transform::{ImageTransform, ZoomDirection}};
    ///
    /// let base = Placement::new(0.0, 0.0, 100.0, 100.0);
    /// let zoomed = ImageTransform::identity().zoomed(ZoomDirection::In, &base);
    /// let cell = zoomed.apply(&base);
    /// assert!((cell.center().x() - 50.0).abs() < 1e-9);
    /// assert!(cell.width() > 100.0);
    /// ```
    pub fn zoomed(&self, direction: ZoomDirection, base: &Placement) -> Self {
        let zoom = match direction {
            ZoomDirection::In => self.zoom * ZOOM_STEP,
            ZoomDirection::Out => self.zoom / ZOOM_STEP,
        }
        .clamp(MIN_ZOOM, MAX_ZOOM);

        let delta_width = base.width() * zoom - base.width() * self.zoom;
        let delta_height = base.height() * zoom - base.height() * self.zoom;
        let pan = Point::new(
            self.pan.x() - delta_width / 2.0,
            self.pan.y() - delta_height / 2.0,
        );

        trace!(from = self.zoom, to = zoom; "Zoom step");

        Self {
            pan,
            zoom,
            rotation: self.rotation,
        }
    }

    /// Merges this transform into base geometry.
    ///
    /// The box is moved by the pan offset and scaled about its top-left
    /// corner; the rotation is added to whatever rotation the layout
    /// assigned.
    pub fn apply(&self, base: &Placement) -> Placement {
        let rotation = base.rotation().unwrap_or(0.0) + self.rotation;
        let placement = Placement::new(
            base.x() + self.pan.x(),
            base.y() + self.pan.y(),
            base.width() * self.zoom,
            base.height() * self.zoom,
        );
        if rotation == 0.0 {
            placement
        } else {
            placement.with_rotation(rotation)
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_identity_is_noop() {
        let base = Placement::new(10.0, 20.0, 30.0, 40.0);
        let identity = ImageTransform::identity();
        assert!(identity.is_identity());
        assert_eq!(identity.apply(&base), base);
    }

    #[test]
    fn test_apply_pan_and_zoom() {
        let base = Placement::new(10.0, 20.0, 30.0, 40.0);
        let transform = ImageTransform::identity()
            .with_pan(Point::new(5.0, -5.0))
            .with_zoom(2.0);
        let cell = transform.apply(&base);
        assert_eq!(cell.x(), 15.0);
        assert_eq!(cell.y(), 15.0);
        assert_eq!(cell.width(), 60.0);
        assert_eq!(cell.height(), 80.0);
        assert_eq!(cell.rotation(), None);
    }

    #[test]
    fn test_apply_combines_rotation() {
        let base = Placement::new(0.0, 0.0, 10.0, 10.0).with_rotation(12.0);
        let cell = ImageTransform::identity().with_rotation(-2.0).apply(&base);
        assert_eq!(cell.rotation(), Some(10.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        assert_eq!(ImageTransform::identity().with_zoom(50.0).zoom(), MAX_ZOOM);
        assert_eq!(ImageTransform::identity().with_zoom(0.0).zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_rotation_is_clamped() {
        assert_eq!(
            ImageTransform::identity().with_rotation(270.0).rotation(),
            MAX_ROTATION
        );
        assert_eq!(
            ImageTransform::identity().with_rotation(-270.0).rotation(),
            -MAX_ROTATION
        );
    }

    #[test]
    fn test_zoomed_keeps_center() {
        let base = Placement::new(100.0, 50.0, 200.0, 80.0);
        let mut transform = ImageTransform::identity();
        for _ in 0..5 {
            transform = transform.zoomed(ZoomDirection::In, &base);
        }
        transform = transform.zoomed(ZoomDirection::Out, &base);

        let cell = transform.apply(&base);
        assert_approx_eq!(f64, cell.center().x(), base.center().x(), epsilon = 1e-9);
        assert_approx_eq!(f64, cell.center().y(), base.center().y(), epsilon = 1e-9);
        assert_approx_eq!(f64, transform.zoom(), ZOOM_STEP.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn test_zoomed_stops_at_limit() {
        let base = Placement::new(0.0, 0.0, 10.0, 10.0);
        let at_max = ImageTransform::identity().with_zoom(MAX_ZOOM);
        let zoomed = at_max.zoomed(ZoomDirection::In, &base);
        assert_eq!(zoomed.zoom(), MAX_ZOOM);
        assert!(zoomed.pan().is_zero());
    }
}
