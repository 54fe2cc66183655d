//! Core exercise types and the JSON loader.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::{GeoBounds, GeoPosition};

/// Errors that can occur when loading an exercise.
#[derive(Debug, Error)]
pub enum ExerciseError {
    /// I/O error while reading the exercise file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The exercise file is not valid JSON or does not match the model.
    #[error("Invalid exercise data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which data channels the recording device captured.
///
/// A channel being recorded does not guarantee every sample carries a value
/// for it, since devices drop readings. An unrecorded channel is guaranteed
/// absent everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingMode {
    /// Geographic positions were recorded.
    pub location: bool,
    /// Altitude was recorded.
    pub altitude: bool,
    /// Speed was recorded.
    pub speed: bool,
    /// Cadence was recorded.
    pub cadence: bool,
    /// Heart rate was recorded.
    pub heart_rate: bool,
    /// Temperature was recorded.
    pub temperature: bool,
}

/// One element of the activity timeline.
///
/// Every metric is independently optional ("sparse sample"). A sample
/// without a position is valid data, not an error: it is simply invisible
/// to the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    /// Milliseconds since exercise start.
    pub timestamp: Option<u64>,
    /// Geographic position, if the GPS had a fix.
    pub position: Option<GeoPosition>,
    /// Heart rate in beats per minute.
    pub heart_rate: Option<u16>,
    /// Altitude in meters.
    pub altitude: Option<i16>,
    /// Speed in km/h.
    pub speed: Option<f32>,
    /// Cadence in rounds per minute.
    pub cadence: Option<u16>,
    /// Distance since exercise start in meters.
    pub distance: Option<u32>,
    /// Temperature in degrees Celsius.
    pub temperature: Option<i16>,
}

/// A lap of the exercise.
///
/// The split values describe the moment the lap ended. The final lap's
/// split position coincides with the exercise end position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lap {
    /// Milliseconds since exercise start at the lap split.
    pub time_split: Option<u64>,
    /// Position at the lap split, if location was recorded.
    pub position_split: Option<GeoPosition>,
    /// Heart rate at the lap split.
    pub heart_rate_split: Option<u16>,
}

/// A complete recorded activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    /// Date and time the exercise started.
    pub date: Option<NaiveDateTime>,
    /// Which channels the device recorded.
    pub recording: RecordingMode,
    /// Total duration in milliseconds.
    pub duration: Option<u64>,
    /// Chronologically ordered samples.
    pub samples: Vec<Sample>,
    /// Laps in lap order.
    pub laps: Vec<Lap>,
}

impl Exercise {
    /// Load an exercise from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExerciseError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Whether the exercise carries any positional recording at all.
    pub fn has_track_data(&self) -> bool {
        self.recording.location
    }

    /// The bounding box of all recorded positions, if any sample has one.
    pub fn track_bounds(&self) -> Option<GeoBounds> {
        let positions: Vec<GeoPosition> =
            self.samples.iter().filter_map(|s| s.position).collect();
        GeoBounds::from_positions(&positions)
    }
}
