//! Integration tests for the CollageBuilder API

use collage::{
    CollageBuilder, CollageError,
    canvas::AspectRatio,
    config::AppConfig,
    demo,
    layout::LayoutVariant,
    project::{CollageProject, ProjectImage},
};
use rand::{SeedableRng, rngs::StdRng};

fn sample_image(name: &str, width: u32, height: u32) -> ProjectImage {
    ProjectImage::new(name, "image/png", "data:image/png;base64,", width, height)
}

fn project_with_images(builder: &CollageBuilder, count: usize) -> CollageProject {
    let mut project = builder.new_project();
    for i in 0..count {
        project
            .add_image(sample_image(&format!("image-{i}.png"), 800, 600))
            .expect("Failed to add image");
    }
    project
}

#[test]
fn test_builder_with_default_config() {
    let builder = CollageBuilder::default();
    let project = project_with_images(&builder, 3);

    let svg = builder.render_svg(&project).expect("Failed to render");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert_eq!(svg.matches("<image").count(), 3);
}

#[test]
fn test_builder_empty_project_renders_background_only() {
    let builder = CollageBuilder::default();
    let project = builder.new_project();

    let svg = builder.render_svg(&project).expect("Failed to render");
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("<image"));
}

#[test]
fn test_builder_arranges_every_image() {
    let builder = CollageBuilder::default();
    let mut project = project_with_images(&builder, 6);

    for variant in LayoutVariant::ALL {
        project.set_layout(variant);
        let arrangement = builder.arrange(&project).expect("Failed to arrange");
        assert_eq!(
            arrangement.len() + arrangement.unplaced(),
            6,
            "variant {variant}"
        );
        if !variant.may_drop_items() {
            assert_eq!(arrangement.len(), 6, "variant {variant}");
        }
    }
}

#[test]
fn test_builder_scene_pairs_images_with_their_own_slots() {
    let builder = CollageBuilder::default();
    let mut project = project_with_images(&builder, 5);
    project.set_layout(LayoutVariant::CirclePack);
    // Spacing wider than the canvas leaves most circles without room.
    project.set_spacing(5000.0);

    let arrangement = builder.arrange(&project).expect("Failed to arrange");
    let scene = builder.scene(&project).expect("Failed to build scene");

    assert_eq!(arrangement.slots().len(), 5);
    assert_eq!(scene.images().len(), arrangement.len());
    for scene_image in scene.images() {
        let index = project
            .images()
            .iter()
            .position(|image| image.name() == scene_image.name())
            .expect("Scene image missing from project");
        assert_eq!(
            arrangement.slots()[index],
            Some(scene_image.base()),
            "image {index}"
        );
    }
}

#[test]
fn test_builder_frame_follows_aspect_ratio() {
    let builder = CollageBuilder::default();
    let mut project = builder.new_project();
    project.set_aspect_ratio(AspectRatio::Square);

    let frame = builder.frame(&project).expect("Failed to frame");
    assert_eq!(frame.outer().width(), frame.outer().height());
}

#[test]
fn test_builder_save_and_load_project() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("project.json");

    let builder = CollageBuilder::default();
    let mut project = project_with_images(&builder, 2);
    project.set_layout(LayoutVariant::Honeycomb);
    project.set_spacing(24.0);

    builder
        .save_project(&project, &path)
        .expect("Failed to save");
    let loaded = builder.load_project(&path).expect("Failed to load");

    assert_eq!(loaded, project);
}

#[test]
fn test_builder_load_missing_project() {
    let builder = CollageBuilder::default();
    let result = builder.load_project("/nonexistent/collage/project.json");
    assert!(matches!(result, Err(CollageError::Io(_))));
}

#[test]
fn test_builder_load_invalid_project() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("Failed to write");

    let builder = CollageBuilder::default();
    let result = builder.load_project(&path);
    assert!(matches!(result, Err(CollageError::Project(_))));
}

#[test]
fn test_builder_export_svg_writes_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("collage.svg");

    let builder = CollageBuilder::default();
    let mut project = project_with_images(&builder, 4);
    project.set_layout(LayoutVariant::Polaroid);

    builder
        .export_svg(&project, &path)
        .expect("Failed to export");

    let content = std::fs::read_to_string(&path).expect("Failed to read output");
    assert!(content.contains("<svg"));
    assert_eq!(content.matches("<image").count(), 4);
}

#[test]
fn test_builder_rejects_invalid_background() {
    let builder = CollageBuilder::default();
    let mut project = builder.new_project();
    assert!(matches!(
        project.set_background_color("definitely-not-a-color"),
        Err(CollageError::Style(_))
    ));
}

#[test]
fn test_builder_renders_demo_project() {
    let builder = CollageBuilder::new(AppConfig::default());
    let mut rng = StdRng::seed_from_u64(7);
    let project = demo::demo_project(builder.config(), Some(5), &mut rng)
        .expect("Failed to build demo project");

    let svg = builder.render_svg(&project).expect("Failed to render");
    assert_eq!(svg.matches("<image").count(), 5);
    assert!(svg.contains("data:image/svg+xml;base64,"));
}
