//! Collage project documents.
//!
//! A [`CollageProject`] holds everything needed to re-create a collage: the
//! embedded source images, per-image transforms, and the layout, style, and
//! export settings. It is persisted as pretty-printed JSON with camelCase
//! keys:
//!
//! ```json
//! {
//!   "images": [{ "name": "a.jpg", "type": "image/jpeg", "base64": "data:...", "width": 800, "height": 600 }],
//!   "imageTransforms": [{ "pan": { "x": 0, "y": 0 }, "zoom": 1, "rotation": 0 }],
//!   "layout": "grid",
//!   "backgroundColor": "#ffffff",
//!   "spacing": 10,
//!   ...
//! }
//! ```
//!
//! `images`, `imageTransforms` and `layout` are required; every other key
//! falls back to its default.

use std::{fs, io::Cursor, path::Path};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, ImageReader};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use collage_core::{color::Color, transform::ImageTransform};

use crate::{
    canvas::AspectRatio,
    config::AppConfig,
    error::CollageError,
    export::{ExportFormat, OutputResolution},
    layout::{Item, LayoutVariant},
};

/// Maximum number of images in one collage.
pub const MAX_IMAGES: usize = 10;

/// Maximum size of an imported image file, in megabytes.
pub const MAX_FILE_SIZE_MB: u64 = 5;

const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

/// A source image embedded in a project as a base64 data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    name: String,
    #[serde(rename = "type")]
    mime_type: String,
    base64: String,
    width: u32,
    height: u32,
}

impl ProjectImage {
    /// Creates an image from an already encoded data URL.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data_url: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            base64: data_url.into(),
            width,
            height,
        }
    }

    /// Imports a JPEG or PNG file of at most [`MAX_FILE_SIZE_MB`] megabytes.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Io`] if the file cannot be read, or
    /// [`CollageError::Image`] if it is too large, not a JPEG/PNG, or its
    /// header cannot be decoded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CollageError> {
        let path = path.as_ref();
        let size = fs::metadata(path)?.len();
        if size > MAX_FILE_SIZE_BYTES {
            return Err(CollageError::Image(format!(
                "`{}` is larger than {MAX_FILE_SIZE_MB} MB",
                path.display()
            )));
        }

        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let image = Self::from_bytes(name, &bytes)?;
        info!(path:? = path, width = image.width, height = image.height; "Image imported");
        Ok(image)
    }

    /// Builds an image from encoded JPEG or PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Image`] for any other format or an
    /// undecodable header.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, CollageError> {
        let name = name.into();
        let format = image::guess_format(bytes)
            .map_err(|err| CollageError::Image(format!("`{name}`: {err}")))?;
        let mime_type = match format {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            other => {
                return Err(CollageError::Image(format!(
                    "`{name}`: unsupported format {other:?}, expected JPEG or PNG"
                )));
            }
        };

        let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
            .into_dimensions()
            .map_err(|err| CollageError::Image(format!("`{name}`: {err}")))?;

        let data_url = format!("data:{mime_type};base64,{}", STANDARD.encode(bytes));
        Ok(Self::new(name, mime_type, data_url, width, height))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type, stored under the `type` key.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The `data:` URL holding the encoded image.
    pub fn data_url(&self) -> &str {
        &self.base64
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decodes the payload of the data URL.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Image`] when the URL has no payload or it is
    /// not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, CollageError> {
        let (_, payload) = self.base64.split_once(',').ok_or_else(|| {
            CollageError::Image(format!("`{}`: data URL has no payload", self.name))
        })?;
        STANDARD
            .decode(payload)
            .map_err(|err| CollageError::Image(format!("`{}`: {err}", self.name)))
    }

    /// Layout input for this image.
    pub fn item(&self) -> Item {
        Item::new(f64::from(self.width), f64::from(self.height))
    }
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_spacing() -> f64 {
    10.0
}

fn default_jpg_quality() -> f64 {
    0.95
}

fn default_custom_side() -> u32 {
    4096
}

/// A saved collage: images, transforms and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollageProject {
    images: Vec<ProjectImage>,
    image_transforms: Vec<ImageTransform>,
    layout: LayoutVariant,
    #[serde(default = "default_background_color")]
    background_color: String,
    #[serde(default = "default_spacing")]
    spacing: f64,
    #[serde(default)]
    corner_radius: f64,
    #[serde(default)]
    aspect_ratio: AspectRatio,
    #[serde(default)]
    export_format: ExportFormat,
    #[serde(default = "default_jpg_quality")]
    jpg_quality: f64,
    #[serde(default)]
    output_resolution: OutputResolution,
    #[serde(default = "default_custom_side")]
    custom_width: u32,
    #[serde(default = "default_custom_side")]
    custom_height: u32,
}

impl Default for CollageProject {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            image_transforms: Vec::new(),
            layout: LayoutVariant::default(),
            background_color: default_background_color(),
            spacing: default_spacing(),
            corner_radius: 0.0,
            aspect_ratio: AspectRatio::default(),
            export_format: ExportFormat::default(),
            jpg_quality: default_jpg_quality(),
            output_resolution: OutputResolution::default(),
            custom_width: default_custom_side(),
            custom_height: default_custom_side(),
        }
    }
}

impl CollageProject {
    /// Creates an empty project seeded from configuration defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        let export = config.export();
        Self {
            layout: config.layout().variant(),
            spacing: config.layout().spacing(),
            background_color: config.style().background_color_str().to_string(),
            corner_radius: config.style().corner_radius(),
            export_format: export.format(),
            jpg_quality: export.jpg_quality(),
            output_resolution: export.resolution(),
            custom_width: export.custom_width(),
            custom_height: export.custom_height(),
            ..Self::default()
        }
    }

    /// Parses a project document.
    ///
    /// Transforms are realigned with the image list: missing entries become
    /// identity transforms, extra entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Project`] for malformed JSON or missing
    /// required keys.
    pub fn from_json(json: &str) -> Result<Self, CollageError> {
        let mut project: Self = serde_json::from_str(json)?;
        project.align_transforms();
        debug!(images = project.images.len(), layout:% = project.layout; "Project parsed");
        Ok(project)
    }

    /// Serializes the project as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Project`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CollageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn align_transforms(&mut self) {
        if self.image_transforms.len() != self.images.len() {
            warn!(
                images = self.images.len(),
                transforms = self.image_transforms.len();
                "Image transforms do not match images, realigning"
            );
            self.image_transforms
                .resize(self.images.len(), ImageTransform::identity());
        }
    }

    pub fn images(&self) -> &[ProjectImage] {
        &self.images
    }

    pub fn image_transforms(&self) -> &[ImageTransform] {
        &self.image_transforms
    }

    /// Layout inputs for every image, in order.
    pub fn items(&self) -> Vec<Item> {
        self.images.iter().map(ProjectImage::item).collect()
    }

    /// Appends an image with an identity transform.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Image`] when the project already holds
    /// [`MAX_IMAGES`] images.
    pub fn add_image(&mut self, image: ProjectImage) -> Result<(), CollageError> {
        if self.images.len() >= MAX_IMAGES {
            return Err(CollageError::Image(format!(
                "cannot add `{}`: a collage holds at most {MAX_IMAGES} images",
                image.name
            )));
        }
        self.images.push(image);
        self.image_transforms.push(ImageTransform::identity());
        Ok(())
    }

    /// Removes the image at `index` together with its transform.
    pub fn remove_image(&mut self, index: usize) -> Option<ProjectImage> {
        if index >= self.images.len() {
            return None;
        }
        self.image_transforms.remove(index);
        Some(self.images.remove(index))
    }

    /// Moves the image at `from` to position `to`, keeping its transform.
    ///
    /// Returns false when either index is out of range.
    pub fn move_image(&mut self, from: usize, to: usize) -> bool {
        let len = self.images.len();
        if from >= len || to >= len {
            return false;
        }
        let image = self.images.remove(from);
        self.images.insert(to, image);
        let transform = self.image_transforms.remove(from);
        self.image_transforms.insert(to, transform);
        true
    }

    pub fn transform(&self, index: usize) -> Option<ImageTransform> {
        self.image_transforms.get(index).copied()
    }

    /// Replaces the transform of the image at `index`.
    ///
    /// Returns false when the index is out of range.
    pub fn set_transform(&mut self, index: usize, transform: ImageTransform) -> bool {
        match self.image_transforms.get_mut(index) {
            Some(slot) => {
                *slot = transform;
                true
            }
            None => false,
        }
    }

    pub fn layout(&self) -> LayoutVariant {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutVariant) {
        self.layout = layout;
    }

    /// The stored background color string, unparsed.
    pub fn background_color_str(&self) -> &str {
        &self.background_color
    }

    /// Returns the parsed background color.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Style`] when the stored string is not a valid
    /// CSS color.
    pub fn background_color(&self) -> Result<Color, CollageError> {
        Color::new(&self.background_color).map_err(CollageError::Style)
    }

    /// Sets the background color after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::Style`] for an invalid CSS color.
    pub fn set_background_color(&mut self, color: &str) -> Result<(), CollageError> {
        Color::new(color).map_err(CollageError::Style)?;
        self.background_color = color.to_string();
        Ok(())
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn set_corner_radius(&mut self, corner_radius: f64) {
        self.corner_radius = corner_radius;
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    pub fn jpg_quality(&self) -> f64 {
        self.jpg_quality
    }

    pub fn output_resolution(&self) -> OutputResolution {
        self.output_resolution
    }

    pub fn set_output_resolution(&mut self, resolution: OutputResolution) {
        self.output_resolution = resolution;
    }

    /// Width and height used with [`OutputResolution::Custom`].
    pub fn custom_size(&self) -> (u32, u32) {
        (self.custom_width, self.custom_height)
    }
}
