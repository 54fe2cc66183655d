//! Tooltip content assembly for the scrubbed sample.

use crate::exercise::Sample;
use crate::format::{FormatUtils, SpeedMode};
use crate::i18n::Messages;

/// Build the tooltip text for a sample.
///
/// The first line is always the 1-based sample index. After that, one line
/// per present metric, in fixed order: time, distance, altitude, heart
/// rate, speed, temperature. Absent metrics contribute no line. Every line
/// is newline-terminated.
pub fn build_tooltip(
    sample: &Sample,
    index: usize,
    format: &FormatUtils,
    speed_mode: SpeedMode,
    messages: &Messages,
) -> String {
    let mut text = String::new();

    append_line(
        &mut text,
        messages,
        "track.tooltip.trackpoint",
        &(index + 1).to_string(),
    );

    if let Some(timestamp) = sample.timestamp {
        append_line(
            &mut text,
            messages,
            "track.tooltip.time",
            &FormatUtils::seconds_to_time_string(timestamp / 1000),
        );
    }
    if let Some(distance) = sample.distance {
        append_line(
            &mut text,
            messages,
            "track.tooltip.distance",
            &format.distance_to_string(f64::from(distance) / 1000.0, 3),
        );
    }
    if let Some(altitude) = sample.altitude {
        append_line(
            &mut text,
            messages,
            "track.tooltip.altitude",
            &format.height_to_string(i32::from(altitude)),
        );
    }
    if let Some(heart_rate) = sample.heart_rate {
        append_line(
            &mut text,
            messages,
            "track.tooltip.heartrate",
            &format.heart_rate_to_string(u32::from(heart_rate)),
        );
    }
    if let Some(speed) = sample.speed {
        append_line(
            &mut text,
            messages,
            "track.tooltip.speed",
            &format.speed_to_string(f64::from(speed), 2, speed_mode),
        );
    }
    if let Some(temperature) = sample.temperature {
        append_line(
            &mut text,
            messages,
            "track.tooltip.temperature",
            &format.temperature_to_string(i32::from(temperature)),
        );
    }

    text
}

fn append_line(text: &mut String, messages: &Messages, key: &str, value: &str) {
    text.push_str(&messages.get(key));
    text.push_str(": ");
    text.push_str(value);
    text.push('\n');
}
