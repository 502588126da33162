//! Canvas framing.
//!
//! The collage is drawn inside a container (a window, or the configured
//! canvas size for headless use). An [`AspectRatio`] selects the largest
//! rectangle of that shape that fits the container, and a fixed border is
//! then subtracted to give the area the layout engine fills.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use collage_core::geometry::{Point, Size};

/// Border width, in pixels, drawn around the canvas.
pub const DEFAULT_BORDER: f64 = 4.0;

/// Canvas shape constraint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Use the whole container.
    #[default]
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "9:16")]
    Portrait9x16,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 6] = [
        Self::Free,
        Self::Square,
        Self::Landscape4x3,
        Self::Widescreen,
        Self::Portrait3x4,
        Self::Portrait9x16,
    ];

    /// Width over height, or `None` for [`AspectRatio::Free`].
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::Free => None,
            Self::Square => Some(1.0),
            Self::Landscape4x3 => Some(4.0 / 3.0),
            Self::Widescreen => Some(16.0 / 9.0),
            Self::Portrait3x4 => Some(3.0 / 4.0),
            Self::Portrait9x16 => Some(9.0 / 16.0),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "1:1" => Ok(Self::Square),
            "4:3" => Ok(Self::Landscape4x3),
            "16:9" => Ok(Self::Widescreen),
            "3:4" => Ok(Self::Portrait3x4),
            "9:16" => Ok(Self::Portrait9x16),
            _ => Err("Unsupported aspect ratio"),
        }
    }
}

impl From<AspectRatio> for &'static str {
    fn from(val: AspectRatio) -> Self {
        match val {
            AspectRatio::Free => "free",
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Portrait9x16 => "9:16",
        }
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// The drawn canvas: its outer box and the inner layout area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    outer: Size,
    border: f64,
}

impl CanvasFrame {
    /// Fits a canvas of the given aspect ratio into `container`.
    ///
    /// When the container is wider than the target ratio, the canvas takes
    /// the full container height; otherwise it takes the full width.
    /// Returns `None` when the container or the area left inside the border
    /// is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use collage::canvas::{AspectRatio, CanvasFrame};
    /// use collage_core::geometry::Size;
    ///
    /// let frame = CanvasFrame::fit(Size::new(1200.0, 800.0), AspectRatio::Square, 4.0).unwrap();
    /// assert_eq!(frame.outer(), Size::new(800.0, 800.0));
    /// assert_eq!(frame.inner(), Size::new(792.0, 792.0));
    /// ```
    pub fn fit(container: Size, aspect: AspectRatio, border: f64) -> Option<Self> {
        if !container.is_positive() {
            return None;
        }
        let border = if border.is_finite() { border.max(0.0) } else { 0.0 };

        let outer = match aspect.ratio() {
            None => container,
            Some(target) if container.aspect_ratio() > target => {
                Size::new(container.height() * target, container.height())
            }
            Some(target) => Size::new(container.width(), container.width() / target),
        };

        let frame = Self { outer, border };
        if !frame.inner().is_positive() {
            debug!(container:?, border; "Canvas too small for its border");
            return None;
        }
        Some(frame)
    }

    /// The full canvas including its border.
    pub fn outer(&self) -> Size {
        self.outer
    }

    /// The area available to the layout engine.
    pub fn inner(&self) -> Size {
        self.outer.shrink(self.border)
    }

    pub fn border(&self) -> f64 {
        self.border
    }

    /// Top-left corner of the inner area in outer coordinates.
    pub fn inner_origin(&self) -> Point {
        Point::new(self.border, self.border)
    }
}
