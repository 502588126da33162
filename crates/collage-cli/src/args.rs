//! Command-line argument definitions for the Collage CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; each [`Command`] covers one step of building a collage.

use clap::{Args as ClapArgs, Parser, Subcommand};

use collage::{canvas::AspectRatio, layout::LayoutVariant};

/// Command-line arguments for the Collage tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a project document from image files.
    Init(InitArgs),

    /// Create a project filled with placeholder images.
    Demo(DemoArgs),

    /// Render a project document to SVG.
    Render(RenderArgs),

    /// Print the computed placements of a project as JSON.
    Layout(LayoutArgs),
}

#[derive(ClapArgs, Debug)]
pub struct InitArgs {
    /// JPEG or PNG files to add, in order
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Path of the project document to write
    #[arg(short, long, default_value = "collage.json")]
    pub output: String,

    /// Layout variant (grid, masonry, rows, ...)
    #[arg(short, long)]
    pub layout: Option<LayoutVariant>,

    /// Canvas aspect ratio (free, 1:1, 4:3, 16:9, 3:4, 9:16)
    #[arg(short, long)]
    pub aspect_ratio: Option<AspectRatio>,

    /// Background color as any CSS color string
    #[arg(short, long)]
    pub background: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct DemoArgs {
    /// Path of the project document to write
    #[arg(short, long, default_value = "collage.json")]
    pub output: String,

    /// Number of placeholder images (1-10); random when omitted
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for a reproducible demo
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Layout variant (grid, masonry, rows, ...)
    #[arg(short, long)]
    pub layout: Option<LayoutVariant>,
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Path to the project document
    pub project: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Render with this layout instead of the project's own
    #[arg(short, long)]
    pub layout: Option<LayoutVariant>,

    /// Override the project's spacing between images
    #[arg(short, long)]
    pub spacing: Option<f64>,
}

#[derive(ClapArgs, Debug)]
pub struct LayoutArgs {
    /// Path to the project document
    pub project: String,

    /// Arrange with this layout instead of the project's own
    #[arg(short, long)]
    pub layout: Option<LayoutVariant>,

    /// Override the project's spacing between images
    #[arg(short, long)]
    pub spacing: Option<f64>,

    /// Write the placements here instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,
}
