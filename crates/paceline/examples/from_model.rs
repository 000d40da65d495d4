//! Example: Rendering a workout built from the model
//!
//! This example demonstrates how to programmatically build a workout
//! using the model types directly, without parsing PaceML source.

use paceline::{
    WorkoutBuilder,
    workout::{Element, Interval, Metadata, Repetition, Workout},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building workout from the model...\n");

    let metadata = Metadata {
        title: Some("Track Intervals".to_string()),
        date: Some("2024-06-02".to_string()),
        athlete: Some("Jane Doe".to_string()),
    };

    let elements = vec![
        Element::Interval(Interval::new("15min", "AR").with_title("Warmup")),
        Element::Repetition(
            Repetition::new(
                8,
                vec![
                    Interval::new("90s", "TZ").with_title("Rep"),
                    Interval::new("60s", "RZ").with_title("Float"),
                ],
            )
            .with_title("Main set"),
        ),
        Element::Interval(Interval::new("10min", "AR").with_title("Cooldown")),
    ];

    let workout = Workout::new(metadata, elements);

    // Print workout info
    println!("Created workout:");
    println!("  Title: {:?}", workout.metadata().title);
    println!("  Elements: {}", workout.elements().len());
    println!();

    // Render the workout to SVG using WorkoutBuilder
    println!("Rendering to SVG...");
    let builder = WorkoutBuilder::default();
    let svg = builder.render_svg(&workout)?;

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    // Write to file
    let output_path = "from_model_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
