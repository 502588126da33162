//! Collage CLI library
//!
//! This module contains the core CLI logic for the Collage tool: creating
//! project documents, rendering them, and inspecting computed layouts.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, DemoArgs, InitArgs, LayoutArgs, RenderArgs};
pub use error_adapter::ErrorAdapter;

use std::{fs, io::Write};

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use collage::{
    CollageBuilder, CollageError, demo,
    layout::LayoutVariant,
    project::{CollageProject, ProjectImage},
};

/// Run the Collage CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CollageError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid project documents or images
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CollageError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = CollageBuilder::new(app_config);

    match &args.command {
        Command::Init(init) => init_project(&builder, init),
        Command::Demo(demo) => demo_project(&builder, demo),
        Command::Render(render) => render_project(&builder, render),
        Command::Layout(layout) => print_layout(&builder, layout),
    }
}

fn init_project(builder: &CollageBuilder, args: &InitArgs) -> Result<(), CollageError> {
    info!(images = args.images.len(), output_path = args.output; "Creating project");

    let mut project = builder.new_project();
    for path in &args.images {
        project.add_image(ProjectImage::from_file(path)?)?;
    }
    if let Some(layout) = args.layout {
        project.set_layout(layout);
    }
    if let Some(aspect_ratio) = args.aspect_ratio {
        project.set_aspect_ratio(aspect_ratio);
    }
    if let Some(color) = &args.background {
        project.set_background_color(color)?;
    }

    builder.save_project(&project, &args.output)?;
    info!(output_file = args.output; "Project created");
    Ok(())
}

fn demo_project(builder: &CollageBuilder, args: &DemoArgs) -> Result<(), CollageError> {
    let mut project = match args.seed {
        Some(seed) => demo::demo_project(
            builder.config(),
            args.count,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => demo::demo_project(builder.config(), args.count, &mut rand::rng())?,
    };
    if let Some(layout) = args.layout {
        project.set_layout(layout);
    }

    builder.save_project(&project, &args.output)?;
    info!(output_file = args.output; "Demo project created");
    Ok(())
}

fn render_project(builder: &CollageBuilder, args: &RenderArgs) -> Result<(), CollageError> {
    info!(
        project_path = args.project,
        output_path = args.output;
        "Rendering collage"
    );

    let mut project = builder.load_project(&args.project)?;
    apply_overrides(&mut project, args.layout, args.spacing);
    builder.export_svg(&project, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");
    Ok(())
}

fn print_layout(builder: &CollageBuilder, args: &LayoutArgs) -> Result<(), CollageError> {
    let mut project = builder.load_project(&args.project)?;
    apply_overrides(&mut project, args.layout, args.spacing);

    let arrangement = builder.arrange(&project)?;
    let json = serde_json::to_string_pretty(&arrangement)?;

    match &args.output {
        Some(path) => fs::write(path, json)?,
        None => writeln!(std::io::stdout().lock(), "{json}")?,
    }
    Ok(())
}

fn apply_overrides(
    project: &mut CollageProject,
    layout: Option<LayoutVariant>,
    spacing: Option<f64>,
) {
    if let Some(layout) = layout {
        info!(variant:% = layout; "Overriding project layout");
        project.set_layout(layout);
    }
    if let Some(spacing) = spacing {
        info!(spacing; "Overriding project spacing");
        project.set_spacing(spacing);
    }
}
