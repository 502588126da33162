//! Configuration types for collage layout and export.
//!
//! This module provides configuration structures that seed new projects and
//! control headless rendering. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`CanvasConfig`] - Container size and border used when no window exists.
//! - [`LayoutConfig`] - Default [`LayoutVariant`] and spacing.
//! - [`StyleConfig`] - Background color and corner radius.
//! - [`ExportConfig`] - Output format, quality and resolution.
//!
//! Values here only seed new projects; a loaded project keeps its own
//! settings.
//!
//! # Example
//!
//! ```
//! # use collage::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.layout().spacing(), 10.0);
//! ```

use serde::Deserialize;

use collage_core::{color::Color, geometry::Size};

use crate::{
    canvas::DEFAULT_BORDER,
    export::{ExportFormat, OutputResolution},
    layout::LayoutVariant,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        canvas: CanvasConfig,
        layout: LayoutConfig,
        style: StyleConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            canvas,
            layout,
            style,
            export,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Container used to frame the canvas in headless rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f64,
    height: f64,
    border: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            border: DEFAULT_BORDER,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: f64, height: f64, border: f64) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    /// Container size the canvas frame is fitted into.
    pub fn container(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn border(&self) -> f64 {
        self.border
    }
}

/// Default arrangement for new projects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Default [`LayoutVariant`]; unknown names fall back to grid.
    variant: LayoutVariant,

    /// Gap between images, in pixels.
    spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variant: LayoutVariant::default(),
            spacing: 10.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(variant: LayoutVariant, spacing: f64) -> Self {
        Self { variant, spacing }
    }

    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

/// Visual styling defaults for new projects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] as a CSS color string.
    background_color: String,

    /// Corner radius applied to every image, in pixels.
    corner_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            corner_radius: 0.0,
        }
    }
}

impl StyleConfig {
    pub fn new(background_color: impl Into<String>, corner_radius: f64) -> Self {
        Self {
            background_color: background_color.into(),
            corner_radius,
        }
    }

    /// The configured background color string, unparsed.
    pub fn background_color_str(&self) -> &str {
        &self.background_color
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

/// Export defaults for new projects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    format: ExportFormat,
    jpg_quality: f64,
    resolution: OutputResolution,
    custom_width: u32,
    custom_height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            jpg_quality: 0.95,
            resolution: OutputResolution::default(),
            custom_width: 4096,
            custom_height: 4096,
        }
    }
}

impl ExportConfig {
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// JPEG quality between 0 and 1.
    pub fn jpg_quality(&self) -> f64 {
        self.jpg_quality
    }

    pub fn resolution(&self) -> OutputResolution {
        self.resolution
    }

    pub fn custom_width(&self) -> u32 {
        self.custom_width
    }

    pub fn custom_height(&self) -> u32 {
        self.custom_height
    }
}
