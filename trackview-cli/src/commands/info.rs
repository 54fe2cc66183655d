//! Exercise summary command.

use std::path::Path;

use trackview::exercise::Exercise;
use trackview::format::FormatUtils;

use crate::error::CliError;

/// Print a summary of the exercise file.
pub fn run(file: &Path) -> Result<(), CliError> {
    let exercise = Exercise::from_json_file(file)?;

    if let Some(date) = exercise.date {
        println!("Date:     {}", date.format("%Y-%m-%d %H:%M"));
    }
    if let Some(duration) = exercise.duration {
        println!(
            "Duration: {}",
            FormatUtils::seconds_to_time_string(duration / 1000)
        );
    }
    println!("Samples:  {}", exercise.samples.len());
    println!("Laps:     {}", exercise.laps.len());
    println!("Recorded: {}", recorded_channels(&exercise));

    match exercise.track_bounds() {
        Some(bounds) => {
            println!(
                "Track:    {:.5},{:.5} to {:.5},{:.5} (center {})",
                bounds.min_lat, bounds.min_lon, bounds.max_lat, bounds.max_lon,
                bounds.center()
            );
        }
        None => println!("Track:    no position data"),
    }

    Ok(())
}

fn recorded_channels(exercise: &Exercise) -> String {
    let recording = exercise.recording;
    let channels: Vec<&str> = [
        ("location", recording.location),
        ("altitude", recording.altitude),
        ("speed", recording.speed),
        ("cadence", recording.cadence),
        ("heart rate", recording.heart_rate),
        ("temperature", recording.temperature),
    ]
    .iter()
    .filter(|(_, recorded)| *recorded)
    .map(|(name, _)| *name)
    .collect();

    if channels.is_empty() {
        "none".to_string()
    } else {
        channels.join(", ")
    }
}
