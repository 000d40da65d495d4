//! Integration tests for the WorkoutBuilder API
//!
//! These tests verify that the public API works and is usable.

use paceline::{WorkoutBuilder, config::AppConfig};

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = WorkoutBuilder::default();
}

#[test]
fn test_parse_simple_workout() {
    let source = "@title{Easy Run}\n@interval[Easy]{40min}{AR}\n";

    let builder = WorkoutBuilder::default();
    let result = builder.parse(source);
    assert!(
        result.is_ok(),
        "Should parse valid workout: {:?}",
        result.err()
    );
}

#[test]
fn test_render_simple_workout() {
    let source = "\
@title{Hill Repeats}
@interval[Warmup]{15min}{AR}
@reps[Hills]{6}
@interval[Climb]{90s}{TZ}
@interval[Jog down]{2min}{AR}
@interval[Cooldown]{10min}{AR}
";

    let builder = WorkoutBuilder::default();
    let workout = builder.parse(source).expect("Failed to parse workout");
    let result = builder.render_svg(&workout);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
        // warmup + 6 * (climb + jog down) + cooldown
        assert_eq!(svg.matches("class=\"interval\"").count(), 14);
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_timeline_offsets_match_contract() {
    let source = "\
@interval[Warmup]{10min}{AR}
@reps{2}
@interval[Push]{2min}{TZ}
@interval[Rest]{1min}{RZ}
";

    let builder = WorkoutBuilder::default();
    let workout = builder.parse(source).expect("Failed to parse workout");
    let timeline = builder.timeline(&workout).expect("Failed to lay out");

    assert_eq!(timeline.segments().len(), 5);
    assert!((timeline.total_extent() - 16.0 / 60.0).abs() < 1e-12);
    assert!((timeline.segments()[3].start_offset() - 13.0 / 60.0).abs() < 1e-12);
}

#[test]
fn test_parse_json_workout() {
    let source = r#"{
        "metadata": { "title": "Imported" },
        "elements": [
            { "type": "interval", "title": "Warmup", "amount": "10min", "zone": "AR" },
            { "type": "repetition", "count": 2, "intervals": [
                { "title": "Push", "amount": "2min", "zone": "TZ" },
                { "title": "Rest", "amount": "1min", "zone": "RZ" }
            ] }
        ]
    }"#;

    let builder = WorkoutBuilder::default();
    let workout = builder.parse_json(source).expect("Failed to read JSON");
    assert_eq!(workout.metadata().title.as_deref(), Some("Imported"));

    let svg = builder.render_svg(&workout).expect("Failed to render");
    assert_eq!(svg.matches("class=\"interval\"").count(), 5);
}

#[test]
fn test_json_round_trip() {
    let source = "@title{Tempo}\n@interval[Tempo]{8km}{TZ}\n";

    let builder = WorkoutBuilder::default();
    let workout = builder.parse(source).expect("Failed to parse workout");

    let json = builder.to_json(&workout).expect("Failed to serialize");
    let back = builder.parse_json(&json).expect("Failed to deserialize");
    assert_eq!(back, workout);
}

#[test]
fn test_builder_with_config() {
    let source = "@interval{5km}{AR}\n";
    let config = AppConfig::default();

    // Just verify the API works with config
    let builder = WorkoutBuilder::new(config);
    let _result = builder.parse(source);
}

#[test]
fn test_parse_invalid_markup_returns_error() {
    let invalid_source = "@interval[Warmup]\n";

    let builder = WorkoutBuilder::default();
    let result = builder.parse(invalid_source);
    assert!(result.is_err(), "Should return error for invalid markup");
}

#[test]
fn test_render_unparsable_amount_returns_error() {
    let source = "@interval[Mystery]{abc}{AR}\n";

    let builder = WorkoutBuilder::default();
    let workout = builder.parse(source).expect("markup itself is valid");

    let result = builder.render_svg(&workout);
    assert!(result.is_err(), "Layout must refuse unparsable amounts");
}

#[test]
fn test_empty_workout_renders() {
    let builder = WorkoutBuilder::default();
    let workout = builder.parse("").expect("empty source is valid");

    let svg = builder.render_svg(&workout).expect("Failed to render");
    assert!(svg.contains("<svg"), "Empty workout still renders a frame");
}

#[test]
fn test_builder_reusability() {
    let source1 = "@interval[One]{20min}{AR}\n";
    let source2 = "@interval[Two]{5km}{TZ}\n";

    let builder = WorkoutBuilder::default();

    // Parse and render first workout
    let workout1 = builder.parse(source1).expect("Failed to parse workout1");
    let svg1 = builder
        .render_svg(&workout1)
        .expect("Failed to render workout1");

    // Reuse same builder for second workout
    let workout2 = builder.parse(source2).expect("Failed to parse workout2");
    let svg2 = builder
        .render_svg(&workout2)
        .expect("Failed to render workout2");

    assert!(svg1.contains("<svg"), "First SVG should be valid");
    assert!(svg2.contains("<svg"), "Second SVG should be valid");
}
