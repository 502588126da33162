//! SVG rendering for collage scenes.
//!
//! The document's `viewBox` is the outer canvas frame, while its `width` and
//! `height` attributes carry the requested output size, so the same scene
//! scales losslessly to any export resolution.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{ClipPath, Definitions, Group, Image, Rectangle},
};

use collage_core::placement::Placement;

use super::{Error, Exporter, Scene, SceneImage};
use crate::layout::LayoutVariant;

/// Stroke color of the canvas border.
const BORDER_COLOR: &str = "#d1d5db";

/// Polaroid frame padding, relative to the base cell width.
const POLAROID_SIDE_PADDING: f64 = 0.05;
const POLAROID_BOTTOM_PADDING: f64 = 0.2;
const POLAROID_SHADOW_OFFSET: f64 = 3.0;
const POLAROID_SHADOW_OPACITY: f64 = 0.2;

/// Writes scenes to an SVG file.
pub struct SvgExporter {
    file_name: String,
}

impl SvgExporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Writes an SVG document to the configured file
    fn write_document(&self, doc: &Document) -> Result<(), Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let mut file = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for SvgExporter {
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error> {
        let doc = render_document(scene);
        debug!("SVG document rendered");

        self.write_document(&doc)
    }
}

/// Renders a scene into an SVG document.
pub fn render_document(scene: &Scene) -> Document {
    let frame = scene.frame();
    let outer = frame.outer();
    let border = frame.border();
    let (width, height) = scene.output_size();

    let mut doc = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", outer.width(), outer.height()),
        )
        .set("width", width)
        .set("height", height);

    doc = doc.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", outer.width())
            .set("height", outer.height())
            .set("fill", scene.background()),
    );

    if border > 0.0 {
        doc = doc.add(
            Rectangle::new()
                .set("x", border / 2.0)
                .set("y", border / 2.0)
                .set("width", outer.width() - border)
                .set("height", outer.height() - border)
                .set("fill", "none")
                .set("stroke", BORDER_COLOR)
                .set("stroke-width", border),
        );
    }

    let is_polaroid = scene.variant() == LayoutVariant::Polaroid;
    let mut defs = Definitions::new();
    let origin = frame.inner_origin();
    let mut content = Group::new().set(
        "transform",
        format!("translate({}, {})", origin.x(), origin.y()),
    );

    for (index, image) in scene.images().iter().enumerate() {
        let cell = image.cell();
        if !cell.is_finite() {
            debug!(index, name = image.name(); "Skipping image with non-finite geometry");
            continue;
        }

        let photo = if is_polaroid {
            polaroid_photo_area(image)
        } else {
            cell
        };
        let clip_id = format!("clip-image-{index}");
        defs = defs.add(create_clip_path(&clip_id, &photo, scene.corner_radius()));
        content = content.add(render_image(image, &cell, &photo, &clip_id, scene, is_polaroid));
    }

    debug!(images = scene.images().len(), polaroid = is_polaroid; "Rendered scene images");

    doc.add(defs).add(content)
}

fn render_image(
    image: &SceneImage,
    cell: &Placement,
    photo: &Placement,
    clip_id: &str,
    scene: &Scene,
    is_polaroid: bool,
) -> Group {
    let mut group = Group::new();
    if let Some(rotation) = cell.rotation() {
        let center = cell.center();
        group = group.set(
            "transform",
            format!("rotate({rotation} {} {})", center.x(), center.y()),
        );
    }

    if is_polaroid {
        group = group
            .add(
                Rectangle::new()
                    .set("x", cell.x() + POLAROID_SHADOW_OFFSET)
                    .set("y", cell.y() + POLAROID_SHADOW_OFFSET)
                    .set("width", cell.width())
                    .set("height", cell.height())
                    .set("rx", scene.corner_radius())
                    .set("fill", "black")
                    .set("fill-opacity", POLAROID_SHADOW_OPACITY),
            )
            .add(
                Rectangle::new()
                    .set("x", cell.x())
                    .set("y", cell.y())
                    .set("width", cell.width())
                    .set("height", cell.height())
                    .set("rx", scene.corner_radius())
                    .set("fill", "white"),
            );
    }

    group.add(
        Image::new()
            .set("href", image.href())
            .set("x", photo.x())
            .set("y", photo.y())
            .set("width", photo.width())
            .set("height", photo.height())
            .set("preserveAspectRatio", "xMidYMid slice")
            .set("clip-path", format!("url(#{clip_id})")),
    )
}

/// Photo area inside a polaroid frame: 5% padding on the sides and top,
/// 20% at the bottom, relative to the base cell width.
fn polaroid_photo_area(image: &SceneImage) -> Placement {
    let cell = image.cell();
    let base_width = image.base().width();
    let side = base_width * POLAROID_SIDE_PADDING;
    let bottom = base_width * POLAROID_BOTTOM_PADDING;

    let photo = Placement::new(
        cell.x() + side,
        cell.y() + side,
        (cell.width() - 2.0 * side).max(0.0),
        (cell.height() - side - bottom).max(0.0),
    );
    match cell.rotation() {
        Some(rotation) => photo.with_rotation(rotation),
        None => photo,
    }
}

/// Creates an SVG clip path matching `area` with rounded corners.
fn create_clip_path(clip_id: &str, area: &Placement, corner_radius: f64) -> ClipPath {
    let clip_rect = Rectangle::new()
        .set("x", area.x())
        .set("y", area.y())
        .set("width", area.width())
        .set("height", area.height())
        .set("rx", corner_radius)
        .set("ry", corner_radius);

    ClipPath::new().set("id", clip_id).add(clip_rect)
}
