//! Collage - deterministic photo collage layouts.
//!
//! Layout, project persistence, and rendering for photo collages. Twelve
//! layout variants map a list of images onto a canvas; projects store the
//! images alongside per-image adjustments and are rendered to SVG.

pub mod canvas;
pub mod config;
pub mod demo;
pub mod export;
pub mod layout;
pub mod project;

mod error;

pub use collage_core::{color, geometry, placement, transform};

pub use error::CollageError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use canvas::CanvasFrame;
use config::AppConfig;
use export::{Exporter, Scene, SceneImage};
use layout::{Arrangement, LayoutParams};
use project::CollageProject;

/// Builder for loading, arranging and rendering collage projects.
///
/// # Examples
///
/// ```rust,no_run
/// use collage::{CollageBuilder, config::AppConfig};
///
/// let builder = CollageBuilder::new(AppConfig::default());
///
/// // Load a saved project
/// let project = builder.load_project("collage-project.json")
///     .expect("Failed to load");
///
/// // Render it to SVG
/// let svg = builder.render_svg(&project)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = CollageBuilder::default();
/// ```
#[derive(Default)]
pub struct CollageBuilder {
    config: AppConfig,
}

impl CollageBuilder {
    /// Create a new collage builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas, layout,
    ///   style, and export settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Creates an empty project seeded from the configuration.
    pub fn new_project(&self) -> CollageProject {
        CollageProject::from_config(&self.config)
    }

    /// Load a project document from `path`.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::Io` if the file cannot be read, or
    /// `CollageError::Project` if it is not a valid project document.
    pub fn load_project(&self, path: impl AsRef<Path>) -> Result<CollageProject, CollageError> {
        let path = path.as_ref();
        info!(path:? = path; "Loading project");
        let json = fs::read_to_string(path)?;
        let project = CollageProject::from_json(&json)?;
        debug!(images = project.images().len(); "Project loaded");
        Ok(project)
    }

    /// Save a project document to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::Io` if the file cannot be written.
    pub fn save_project(
        &self,
        project: &CollageProject,
        path: impl AsRef<Path>,
    ) -> Result<(), CollageError> {
        let path = path.as_ref();
        info!(path:? = path, images = project.images().len(); "Saving project");
        fs::write(path, project.to_json()?)?;
        Ok(())
    }

    /// Fit the canvas for `project` into the configured container.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::Config` when the configured container leaves
    /// no drawable area.
    pub fn frame(&self, project: &CollageProject) -> Result<CanvasFrame, CollageError> {
        let canvas = self.config.canvas();
        CanvasFrame::fit(canvas.container(), project.aspect_ratio(), canvas.border()).ok_or_else(
            || {
                CollageError::Config(format!(
                    "canvas {}x{} with border {} has no drawable area",
                    canvas.container().width(),
                    canvas.container().height(),
                    canvas.border()
                ))
            },
        )
    }

    /// Compute the base arrangement of the project's images.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::Config` when the canvas cannot be framed.
    pub fn arrange(&self, project: &CollageProject) -> Result<Arrangement, CollageError> {
        let frame = self.frame(project)?;
        let params = LayoutParams::new(project.layout(), frame.inner(), project.spacing());
        let arrangement = layout::arrange(&project.items(), &params);
        info!(
            variant:% = project.layout(),
            placed = arrangement.len(),
            unplaced = arrangement.unplaced();
            "Layout calculated"
        );
        Ok(arrangement)
    }

    /// Assemble the renderable scene for `project`.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::Style` for an invalid background color,
    /// `CollageError::Config` when the canvas cannot be framed, or
    /// `CollageError::Export` when the output size is invalid.
    pub fn scene(&self, project: &CollageProject) -> Result<Scene, CollageError> {
        let frame = self.frame(project)?;
        let background = project.background_color()?;
        let arrangement = self.arrange(project)?;
        let output_size = export::target_size(
            project.output_resolution(),
            frame.outer().aspect_ratio(),
            project.custom_size(),
        )?;

        let mut scene = Scene::new(
            frame,
            background,
            project.corner_radius(),
            project.layout(),
            output_size,
        );
        for ((image, transform), slot) in project
            .images()
            .iter()
            .zip(project.image_transforms())
            .zip(arrangement.slots())
        {
            let Some(placement) = slot else {
                debug!(image = image.name(); "Image left out of the layout");
                continue;
            };
            scene.push_image(SceneImage::new(
                image.name(),
                image.data_url(),
                *placement,
                *transform,
            ));
        }
        trace!(scene:?; "Scene assembled");

        Ok(scene)
    }

    /// Render a project to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `CollageError` for any failure described in [`Self::scene`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collage::{CollageBuilder, config::AppConfig, project::ProjectImage};
    ///
    /// let builder = CollageBuilder::new(AppConfig::default());
    /// let mut project = builder.new_project();
    /// project
    ///     .add_image(ProjectImage::new("a.png", "image/png", "data:image/png;base64,", 4, 3))
    ///     .unwrap();
    ///
    /// let svg = builder.render_svg(&project).expect("Failed to render collage");
    /// assert!(svg.contains("<image"));
    /// ```
    pub fn render_svg(&self, project: &CollageProject) -> Result<String, CollageError> {
        let scene = self.scene(project)?;
        let svg_string = export::svg::render_document(&scene).to_string();
        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    /// Render a project to an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `CollageError` for any failure described in [`Self::scene`],
    /// or `CollageError::Export` if the file cannot be written.
    pub fn export_svg(
        &self,
        project: &CollageProject,
        path: impl AsRef<Path>,
    ) -> Result<(), CollageError> {
        let scene = self.scene(project)?;
        let mut exporter = export::svg::SvgExporter::new(path.as_ref().to_string_lossy());
        exporter.export_scene(&scene)?;
        Ok(())
    }
}
