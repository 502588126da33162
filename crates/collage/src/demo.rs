//! Placeholder content for trying out layouts without real photos.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::info;
use rand::{Rng, seq::SliceRandom};
use svg::{
    Document,
    node::element::{Rectangle, Text},
};

use crate::{
    config::AppConfig,
    error::CollageError,
    project::{CollageProject, MAX_IMAGES, ProjectImage},
};

/// Background and label colors of the placeholder images.
pub const PALETTE: [(&str, &str); 15] = [
    ("#f3a683", "#3d3d3d"),
    ("#f7d794", "#3d3d3d"),
    ("#77dd77", "#3d3d3d"),
    ("#f8c291", "#3d3d3d"),
    ("#e77f67", "#ffffff"),
    ("#786fa6", "#ffffff"),
    ("#cf6a87", "#ffffff"),
    ("#f5cd79", "#3d3d3d"),
    ("#54a0ff", "#ffffff"),
    ("#576574", "#ffffff"),
    ("#e66767", "#ffffff"),
    ("#303952", "#ffffff"),
    ("#3dc1d3", "#3d3d3d"),
    ("#c44569", "#ffffff"),
    ("#227093", "#ffffff"),
];

pub const DEMO_WIDTH: u32 = 800;
pub const DEMO_HEIGHT: u32 = 600;

/// Fewest images a demo picks when no count is given.
const MIN_DEMO_IMAGES: usize = 5;

/// Renders one placeholder image as an SVG data URL.
pub fn placeholder_image(index: usize, background: &str, foreground: &str) -> ProjectImage {
    let (width, height) = (DEMO_WIDTH, DEMO_HEIGHT);
    let font_size = f64::from(width.min(height)) / 6.0;

    let doc = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", width)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", background),
        )
        .add(
            Text::new(format!("Demo {}", index + 1))
                .set("x", f64::from(width) / 2.0)
                .set("y", f64::from(height) / 2.0)
                .set("fill", foreground)
                .set("font-family", "sans-serif")
                .set("font-weight", "bold")
                .set("font-size", font_size)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle"),
        );

    let data_url = format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(doc.to_string())
    );
    ProjectImage::new(
        format!("demo-{index}.svg"),
        "image/svg+xml",
        data_url,
        width,
        height,
    )
}

/// Builds a project of shuffled placeholder images.
///
/// `count` is clamped to `1..=MAX_IMAGES`; without it a count between 5 and
/// [`MAX_IMAGES`] is drawn from `rng`.
///
/// # Errors
///
/// Propagates [`CollageError`] from adding images to the project.
pub fn demo_project<R: Rng + ?Sized>(
    config: &AppConfig,
    count: Option<usize>,
    rng: &mut R,
) -> Result<CollageProject, CollageError> {
    let count = match count {
        Some(count) => count.clamp(1, MAX_IMAGES),
        None => rng.random_range(MIN_DEMO_IMAGES..=MAX_IMAGES),
    };

    let mut palette: Vec<(usize, (&str, &str))> = PALETTE.into_iter().enumerate().collect();
    palette.shuffle(rng);

    let mut project = CollageProject::from_config(config);
    for (index, (background, foreground)) in palette.into_iter().take(count) {
        project.add_image(placeholder_image(index, background, foreground))?;
    }

    info!(count; "Demo project created");
    Ok(project)
}
