//! One-shot static rendering of the track and its lap/start/end markers.

use crate::exercise::Exercise;
use crate::geo::GeoPosition;
use crate::i18n::Messages;
use crate::map::{MapSurface, MarkerColor};

/// Stacking priority of lap markers. Drawn first so start and end render
/// above them.
pub(crate) const LAP_MARKER_PRIORITY: u32 = 0;

/// Stacking priority of the start marker.
pub(crate) const START_MARKER_PRIORITY: u32 = 1000;

/// Stacking priority of the end marker.
pub(crate) const END_MARKER_PRIORITY: u32 = 2000;

/// Ordered positions of all samples that carry one.
///
/// Samples without a position are dropped, not interpolated.
pub fn sample_positions(exercise: &Exercise) -> Vec<GeoPosition> {
    exercise.samples.iter().filter_map(|s| s.position).collect()
}

/// Lap split positions in lap order, excluding the last lap.
///
/// The last lap's split position is the exercise end position and gets the
/// end marker instead.
pub fn lap_positions(exercise: &Exercise) -> Vec<GeoPosition> {
    let lap_count = exercise.laps.len();
    exercise
        .laps
        .iter()
        .take(lap_count.saturating_sub(1))
        .filter_map(|lap| lap.position_split)
        .collect()
}

/// Draw the full track and the static lap/start/end markers.
///
/// Runs once per controller lifetime, after the map surface is ready. With
/// no positioned samples at all, nothing is drawn.
pub fn draw_track_and_laps<M: MapSurface>(map: &mut M, exercise: &Exercise, messages: &Messages) {
    let positions = sample_positions(exercise);
    let (Some(first), Some(last)) = (positions.first().copied(), positions.last().copied())
    else {
        return;
    };

    map.add_track(&positions);

    // lap markers first, start and end need to be displayed on top
    for (i, lap_position) in lap_positions(exercise).into_iter().enumerate() {
        let lap_number = (i + 1).to_string();
        let label = messages.format("track.maptooltip.lap", &[lap_number.as_str()]);
        map.add_marker(lap_position, &label, MarkerColor::Grey, LAP_MARKER_PRIORITY);
    }

    map.add_marker(
        first,
        &messages.get("track.maptooltip.start"),
        MarkerColor::Green,
        START_MARKER_PRIORITY,
    );
    map.add_marker(
        last,
        &messages.get("track.maptooltip.end"),
        MarkerColor::Red,
        END_MARKER_PRIORITY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::{Lap, RecordingMode, Sample};
    use crate::map::{MapCall, MockMapSurface};

    fn positioned_sample(lat: f64, lon: f64) -> Sample {
        Sample {
            position: Some(GeoPosition::new(lat, lon)),
            ..Default::default()
        }
    }

    fn lap_at(lat: f64, lon: f64) -> Lap {
        Lap {
            position_split: Some(GeoPosition::new(lat, lon)),
            ..Default::default()
        }
    }

    fn exercise(samples: Vec<Sample>, laps: Vec<Lap>) -> Exercise {
        Exercise {
            recording: RecordingMode {
                location: true,
                ..Default::default()
            },
            samples,
            laps,
            ..Default::default()
        }
    }

    #[test]
    fn test_sample_positions_drop_missing() {
        let exercise = exercise(
            vec![
                positioned_sample(53.0, 9.0),
                Sample::default(),
                positioned_sample(53.2, 9.2),
            ],
            vec![],
        );
        let positions = sample_positions(&exercise);
        assert_eq!(positions.len(), 2);
        assert!((positions[1].latitude - 53.2).abs() < 1e-9);
    }

    #[test]
    fn test_lap_positions_exclude_last_lap() {
        let exercise = exercise(
            vec![],
            vec![lap_at(53.0, 9.0), lap_at(53.1, 9.1), lap_at(53.2, 9.2)],
        );
        let positions = lap_positions(&exercise);
        assert_eq!(positions.len(), 2);
        assert!((positions[0].latitude - 53.0).abs() < 1e-9);
        assert!((positions[1].latitude - 53.1).abs() < 1e-9);
    }

    #[test]
    fn test_lap_positions_for_zero_and_one_lap() {
        assert!(lap_positions(&exercise(vec![], vec![])).is_empty());
        assert!(lap_positions(&exercise(vec![], vec![lap_at(53.0, 9.0)])).is_empty());
    }

    #[test]
    fn test_lap_positions_skip_laps_without_split() {
        let exercise = exercise(vec![], vec![Lap::default(), lap_at(53.1, 9.1), lap_at(53.2, 9.2)]);
        let positions = lap_positions(&exercise);
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn test_empty_track_draws_nothing() {
        let mut map = MockMapSurface::default();
        let exercise = exercise(vec![Sample::default(), Sample::default()], vec![]);

        draw_track_and_laps(&mut map, &exercise, &Messages::english());

        assert!(map.calls.is_empty());
    }

    #[test]
    fn test_draw_order_and_priorities() {
        let mut map = MockMapSurface::default();
        let exercise = exercise(
            vec![positioned_sample(53.0, 9.0), positioned_sample(53.5, 9.5)],
            vec![lap_at(53.2, 9.2), lap_at(53.5, 9.5)],
        );

        draw_track_and_laps(&mut map, &exercise, &Messages::english());

        // track first, then lap, then start, then end
        assert_eq!(map.calls.len(), 4);
        assert!(matches!(map.calls[0], MapCall::AddTrack { .. }));

        let MapCall::AddMarker {
            label, z_priority, color, ..
        } = &map.calls[1]
        else {
            panic!("expected lap marker");
        };
        assert_eq!(label, "Lap 1");
        assert_eq!(*z_priority, LAP_MARKER_PRIORITY);
        assert_eq!(*color, MarkerColor::Grey);

        let MapCall::AddMarker {
            label, z_priority, color, ..
        } = &map.calls[2]
        else {
            panic!("expected start marker");
        };
        assert_eq!(label, "Start");
        assert_eq!(*z_priority, START_MARKER_PRIORITY);
        assert_eq!(*color, MarkerColor::Green);

        let MapCall::AddMarker {
            label, z_priority, color, ..
        } = &map.calls[3]
        else {
            panic!("expected end marker");
        };
        assert_eq!(label, "End");
        assert_eq!(*z_priority, END_MARKER_PRIORITY);
        assert_eq!(*color, MarkerColor::Red);
    }

    #[test]
    fn test_start_and_end_markers_at_path_endpoints() {
        let mut map = MockMapSurface::default();
        let exercise = exercise(
            vec![
                Sample::default(),
                positioned_sample(53.0, 9.0),
                positioned_sample(53.5, 9.5),
                Sample::default(),
            ],
            vec![],
        );

        draw_track_and_laps(&mut map, &exercise, &Messages::english());

        let markers = map.added_markers();
        assert_eq!(markers.len(), 2);
        let MapCall::AddMarker { position, .. } = markers[0] else {
            unreachable!();
        };
        assert!((position.latitude - 53.0).abs() < 1e-9);
        let MapCall::AddMarker { position, .. } = markers[1] else {
            unreachable!();
        };
        assert!((position.latitude - 53.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_position_track() {
        // one positioned sample: start and end coincide
        let mut map = MockMapSurface::default();
        let exercise = exercise(vec![positioned_sample(53.0, 9.0)], vec![]);

        draw_track_and_laps(&mut map, &exercise, &Messages::english());

        assert_eq!(map.added_tracks().len(), 1);
        assert_eq!(map.added_markers().len(), 2);
    }
}
