use std::{fs, path::PathBuf};

use tempfile::tempdir;

use collage_cli::{Args, Command, DemoArgs, InitArgs, LayoutArgs, RenderArgs, run};

/// Collects all .json project files from a directory
fn collect_project_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo projects live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn render_args(project: &PathBuf, output: &PathBuf) -> Args {
    args(Command::Render(RenderArgs {
        project: project.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        layout: None,
        spacing: None,
    }))
}

#[test]
fn e2e_smoke_test_valid_projects() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_projects = collect_project_files(demos_path());

    assert!(
        !valid_projects.is_empty(),
        "No valid projects found in demos/"
    );

    let mut failed_projects = Vec::new();

    for project_path in &valid_projects {
        let output_filename = format!(
            "{}.svg",
            project_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&render_args(project_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Failed to read output");
                if !svg.contains("<image") {
                    failed_projects.push((project_path.clone(), "no images rendered".to_string()));
                }
            }
            Err(e) => failed_projects.push((project_path.clone(), e.to_string())),
        }
    }

    if !failed_projects.is_empty() {
        eprintln!("\nValid projects that failed:");
        for (path, err) in &failed_projects {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid project(s) failed unexpectedly",
            failed_projects.len()
        );
    }

    println!("✅ All {} valid projects passed", valid_projects.len());
}

#[test]
fn e2e_smoke_test_error_projects() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_projects = collect_project_files(demos_path().join("errors"));

    assert!(
        !error_projects.is_empty(),
        "No error projects found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for project_path in &error_projects {
        let output_filename = format!(
            "error_{}.svg",
            project_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&render_args(project_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(project_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError projects that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error project(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error projects failed as expected",
        error_projects.len()
    );
}

#[test]
fn e2e_demo_then_render() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let project_path = temp_dir.path().join("demo.json");
    let output_path = temp_dir.path().join("demo.svg");

    run(&args(Command::Demo(DemoArgs {
        output: project_path.to_string_lossy().to_string(),
        count: Some(6),
        seed: Some(42),
        layout: Some("spiral".parse().unwrap()),
    })))
    .expect("Failed to create demo project");

    run(&render_args(&project_path, &output_path)).expect("Failed to render demo project");

    let svg = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(svg.matches("<image").count(), 6);
}

#[test]
fn e2e_init_then_layout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut images = Vec::new();
    for (i, (w, h)) in [(40, 30), (30, 40), (50, 50)].into_iter().enumerate() {
        let path = temp_dir.path().join(format!("photo-{i}.png"));
        image::RgbImage::new(w, h)
            .save(&path)
            .expect("Failed to write image");
        images.push(path.to_string_lossy().to_string());
    }

    let project_path = temp_dir.path().join("project.json");
    run(&args(Command::Init(InitArgs {
        images,
        output: project_path.to_string_lossy().to_string(),
        layout: Some("masonry".parse().unwrap()),
        aspect_ratio: Some("1:1".parse().unwrap()),
        background: Some("#222222".to_string()),
    })))
    .expect("Failed to create project");

    let layout_path = temp_dir.path().join("layout.json");
    run(&args(Command::Layout(LayoutArgs {
        project: project_path.to_string_lossy().to_string(),
        layout: None,
        spacing: Some(0.0),
        output: Some(layout_path.to_string_lossy().to_string()),
    })))
    .expect("Failed to compute layout");

    let layout = fs::read_to_string(&layout_path).expect("Failed to read layout");
    assert_eq!(layout.matches("\"width\"").count(), 3);
    assert!(layout.contains("\"unplaced\": 0"));
}

#[test]
fn e2e_init_rejects_unsupported_image() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let bogus = temp_dir.path().join("notes.txt");
    fs::write(&bogus, "not an image").expect("Failed to write file");

    let result = run(&args(Command::Init(InitArgs {
        images: vec![bogus.to_string_lossy().to_string()],
        output: temp_dir.path().join("p.json").to_string_lossy().to_string(),
        layout: None,
        aspect_ratio: None,
        background: None,
    })));

    assert!(result.is_err());
}
