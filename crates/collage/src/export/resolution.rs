//! Output size selection.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::Error;

/// A4 width at 300 DPI, in pixels.
pub const A4_WIDTH: u32 = 2480;
/// A4 height at 300 DPI, in pixels.
pub const A4_HEIGHT: u32 = 3508;

/// Raster format a collage is exported to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// MIME type for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err("Unsupported export format"),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Output size preset.
///
/// Pixel presets fix the shorter side of the output; `A4` fits the canvas
/// into an A4 page at 300 DPI; `Custom` uses explicit dimensions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputResolution {
    #[serde(rename = "2000px")]
    Px2000,
    #[serde(rename = "3000px")]
    Px3000,
    #[default]
    #[serde(rename = "4096px")]
    Px4096,
    #[serde(rename = "a4")]
    A4,
    #[serde(rename = "custom")]
    Custom,
}

impl OutputResolution {
    /// Shorter side in pixels for the pixel presets.
    pub fn shorter_side(self) -> Option<u32> {
        match self {
            Self::Px2000 => Some(2000),
            Self::Px3000 => Some(3000),
            Self::Px4096 => Some(4096),
            Self::A4 | Self::Custom => None,
        }
    }
}

impl FromStr for OutputResolution {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2000px" => Ok(Self::Px2000),
            "3000px" => Ok(Self::Px3000),
            "4096px" => Ok(Self::Px4096),
            "a4" => Ok(Self::A4),
            "custom" => Ok(Self::Custom),
            _ => Err("Unsupported output resolution"),
        }
    }
}

impl From<OutputResolution> for &'static str {
    fn from(val: OutputResolution) -> Self {
        match val {
            OutputResolution::Px2000 => "2000px",
            OutputResolution::Px3000 => "3000px",
            OutputResolution::Px4096 => "4096px",
            OutputResolution::A4 => "a4",
            OutputResolution::Custom => "custom",
        }
    }
}

impl Display for OutputResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Computes the output size in pixels.
///
/// `aspect` is the canvas width over height; `custom` is used as-is for
/// [`OutputResolution::Custom`]. Results are rounded to whole pixels.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] when the aspect ratio is not a positive
/// finite number or the rounded size is zero.
///
/// # Examples
///
/// ```
/// use collage::export::{target_size, OutputResolution};
///
/// assert_eq!(target_size(OutputResolution::Px2000, 1.5, (0, 0)).unwrap(), (3000, 2000));
/// assert_eq!(target_size(OutputResolution::Px2000, 0.5, (0, 0)).unwrap(), (2000, 4000));
/// ```
pub fn target_size(
    resolution: OutputResolution,
    aspect: f64,
    custom: (u32, u32),
) -> Result<(u32, u32), Error> {
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(Error::InvalidSize(format!("aspect ratio {aspect}")));
    }

    let (width, height) = match resolution {
        OutputResolution::Custom => (f64::from(custom.0), f64::from(custom.1)),
        OutputResolution::A4 => {
            let (a4_width, a4_height) = (f64::from(A4_WIDTH), f64::from(A4_HEIGHT));
            if aspect > a4_width / a4_height {
                (a4_width, a4_width / aspect)
            } else {
                (a4_height * aspect, a4_height)
            }
        }
        preset => {
            let side = f64::from(preset.shorter_side().unwrap_or(4096));
            if aspect >= 1.0 {
                (side * aspect, side)
            } else {
                (side, side / aspect)
            }
        }
    };

    let (width, height) = (width.round(), height.round());
    if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0)
        || width > f64::from(u32::MAX)
        || height > f64::from(u32::MAX)
    {
        return Err(Error::InvalidSize(format!("{width}x{height}")));
    }

    Ok((width as u32, height as u32))
}
