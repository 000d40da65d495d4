use std::{fs, path::PathBuf};

use tempfile::tempdir;

use paceline_cli::{Args, OutputFormat, run};

/// Collects all .paceml files from a directory
fn collect_paceml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("paceml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_dir() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_paceml_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename =
            format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            format: OutputFormat::Svg,
            config: None,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_demos.push((demo_path.clone(), e));
        } else {
            let rendered = fs::read_to_string(&output_path).expect("output file should exist");
            assert!(rendered.contains("<svg"), "output should be SVG");
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_paceml_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            format: OutputFormat::Svg,
            config: None,
            log_level: "off".to_string(),
        };

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_json_output_round_trips() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("hill_repeats.paceml");
    let json_path = temp_dir.path().join("hill_repeats.json");
    let svg_path = temp_dir.path().join("hill_repeats.svg");

    // PaceML -> workout JSON document
    let to_json = Args {
        input: input.to_string_lossy().to_string(),
        output: json_path.to_string_lossy().to_string(),
        format: OutputFormat::Json,
        config: None,
        log_level: "off".to_string(),
    };
    run(&to_json).expect("JSON export should succeed");

    let json = fs::read_to_string(&json_path).expect("JSON output should exist");
    assert!(json.contains("\"type\": \"repetition\""));

    // workout JSON document -> SVG
    let to_svg = Args {
        input: json_path.to_string_lossy().to_string(),
        output: svg_path.to_string_lossy().to_string(),
        format: OutputFormat::Svg,
        config: None,
        log_level: "off".to_string(),
    };
    run(&to_svg).expect("SVG export from JSON should succeed");

    let rendered = fs::read_to_string(&svg_path).expect("SVG output should exist");
    // warmup + 6 * (climb + jog down) + cooldown
    assert_eq!(rendered.matches("class=\"interval\"").count(), 14);
}
