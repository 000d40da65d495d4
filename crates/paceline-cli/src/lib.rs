//! CLI logic for the Paceline workout tool.
//!
//! This module contains the core CLI logic for the Paceline workout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{fs, path::Path};

use log::info;

use paceline::{
    PacelineError, WorkoutBuilder, timeline,
    workout::{Calculation, Workout},
};

/// Run the Paceline CLI application
///
/// This function processes the input file through the Paceline pipeline
/// and writes the resulting SVG (or workout JSON) to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PacelineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Timeline layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PacelineError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing workout"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process workout using WorkoutBuilder API
    let builder = WorkoutBuilder::new(app_config);
    let workout = if is_json_input(&args.input) {
        builder.parse_json(&source)?
    } else {
        builder.parse(&source)?
    };

    log_calculations(&workout)?;

    let output = match args.format {
        OutputFormat::Svg => builder.render_svg(&workout)?,
        OutputFormat::Json => builder.to_json(&workout)?,
    };

    // Write output file
    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Workout exported successfully");

    Ok(())
}

fn is_json_input(input: &str) -> bool {
    Path::new(input)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Log the totals the document asked for with `@total_distance` /
/// `@total_time`.
fn log_calculations(workout: &Workout) -> Result<(), PacelineError> {
    if workout.calculations().is_empty() {
        return Ok(());
    }

    let flat = timeline::flatten(workout.elements());
    let totals = timeline::totals(&flat)?;

    for calculation in workout.calculations() {
        match calculation {
            Calculation::TotalDistance => {
                info!(total_km = totals.distance; "Total distance")
            }
            Calculation::TotalTime => {
                info!(total_hours = totals.time; "Total time")
            }
        }
    }

    Ok(())
}
