//! Renderer-facing description of a collage.

use collage_core::{color::Color, placement::Placement, transform::ImageTransform};

use crate::{canvas::CanvasFrame, layout::LayoutVariant};

/// One placed image: its source, base geometry and user adjustments.
#[derive(Debug, Clone)]
pub struct SceneImage {
    name: String,
    href: String,
    base: Placement,
    transform: ImageTransform,
}

impl SceneImage {
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        base: Placement,
        transform: ImageTransform,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            base,
            transform,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image source, typically a `data:` URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Geometry assigned by the layout engine.
    pub fn base(&self) -> Placement {
        self.base
    }

    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    /// Final cell geometry in inner canvas coordinates.
    pub fn cell(&self) -> Placement {
        self.transform.apply(&self.base)
    }
}

/// A framed canvas with every placed image, ready for an [`Exporter`].
///
/// Images without a placement are not part of the scene.
///
/// [`Exporter`]: super::Exporter
#[derive(Debug, Clone)]
pub struct Scene {
    frame: CanvasFrame,
    background: Color,
    corner_radius: f64,
    variant: LayoutVariant,
    output_size: (u32, u32),
    images: Vec<SceneImage>,
}

impl Scene {
    /// Creates an empty scene rendered at `output_size` pixels.
    pub fn new(
        frame: CanvasFrame,
        background: Color,
        corner_radius: f64,
        variant: LayoutVariant,
        output_size: (u32, u32),
    ) -> Self {
        Self {
            frame,
            background,
            corner_radius: corner_radius.max(0.0),
            variant,
            output_size,
            images: Vec::new(),
        }
    }

    /// Adds an image on top of the ones already in the scene.
    pub fn with_image(mut self, image: SceneImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn push_image(&mut self, image: SceneImage) {
        self.images.push(image);
    }

    pub fn frame(&self) -> &CanvasFrame {
        &self.frame
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    pub fn output_size(&self) -> (u32, u32) {
        self.output_size
    }

    /// Images in paint order, bottom first.
    pub fn images(&self) -> &[SceneImage] {
        &self.images
    }
}
