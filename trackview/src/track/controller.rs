//! The track panel controller.
//!
//! [`TrackController`] owns the one-shot map initialization state machine
//! and the scrubber-to-marker synchronization. It runs on a single UI-bound
//! thread of control: `&mut self` makes concurrent access unrepresentable,
//! and the only suspension point is the awaited map surface load.

use std::sync::Arc;

use tracing::{debug, error};

use crate::exercise::Exercise;
use crate::format::{FormatUtils, SpeedMode, UnitSystem};
use crate::i18n::Messages;
use crate::map::{
    ControlPosition, MapConfig, MapLayer, MapSurface, MarkerColor, MarkerHandle,
    ScaleControlConfig, ZoomControlConfig,
};
use crate::ui::{tooltip_anchor, ScrubberControl, TooltipHost};

use super::render;
use super::tooltip;

/// Stacking priority of the moving position marker.
const POSITION_MARKER_PRIORITY: u32 = 0;

/// Lifecycle of the lazy map initialization.
///
/// `NotRequested → Loading` fires at most once per controller; `Ready` and
/// `Failed` are terminal. A failed load leaves the map surface inert and
/// the scrubber unarmed; there is no retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    /// Display has not been requested yet.
    NotRequested,
    /// The map surface load is in flight.
    Loading,
    /// The surface is loaded and the static render pass has run.
    Ready,
    /// The surface load failed; terminal.
    Failed,
}

/// Controller synchronizing the timeline scrubber with the map surface.
///
/// Generic over its three collaborators so the core can be driven by any
/// map backend and UI toolkit, or by mocks in tests.
pub struct TrackController<M, T, S> {
    exercise: Arc<Exercise>,
    format: FormatUtils,
    speed_mode: SpeedMode,
    messages: Arc<Messages>,
    map_config: MapConfig,
    map: M,
    tooltip: T,
    scrubber: S,
    state: InitState,
    /// The single moving position marker: created once, then only moved.
    position_marker: Option<MarkerHandle>,
}

impl<M, T, S> TrackController<M, T, S>
where
    M: MapSurface,
    T: TooltipHost,
    S: ScrubberControl,
{
    /// Create a controller for the given exercise and collaborators.
    pub fn new(
        exercise: Arc<Exercise>,
        unit_system: UnitSystem,
        speed_mode: SpeedMode,
        messages: Arc<Messages>,
        map: M,
        tooltip: T,
        scrubber: S,
    ) -> Self {
        let map_config = MapConfig {
            layers: vec![
                MapLayer::OpenStreetMap,
                MapLayer::OpenCycleMap,
                MapLayer::HikeBikeMap,
                MapLayer::MtbMap,
            ],
            zoom_control: ZoomControlConfig {
                shown: true,
                position: ControlPosition::BottomLeft,
            },
            scale_control: ScaleControlConfig {
                shown: true,
                position: ControlPosition::BottomLeft,
                metric: unit_system == UnitSystem::Metric,
            },
        };

        Self {
            exercise,
            format: FormatUtils::new(unit_system),
            speed_mode,
            messages,
            map_config,
            map,
            tooltip,
            scrubber,
            state: InitState::NotRequested,
            position_marker: None,
        }
    }

    /// Current initialization state.
    pub fn state(&self) -> InitState {
        self.state
    }

    /// The map surface, e.g. for rendering the final output.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Request the one-time display of map and track.
    ///
    /// Idempotent: any call after the first is a no-op, whatever the
    /// outcome of the first was. Intended to be called when the user
    /// actually wants to see the track, to avoid paying the surface load
    /// on viewer startup.
    pub async fn request_display(&mut self) {
        if self.state != InitState::NotRequested {
            debug!(state = ?self.state, "display already requested");
            return;
        }
        if !self.exercise.has_track_data() {
            // no positional recording, nothing to show
            return;
        }

        self.state = InitState::Loading;
        let config = self.map_config.clone();

        let loaded = self.map.display_map(config).await;
        match loaded {
            Ok(()) => {
                self.state = InitState::Ready;
                render::draw_track_and_laps(&mut self.map, &self.exercise, &self.messages);
                // arm the scrubber over the full sample range
                let upper = self.exercise.samples.len().saturating_sub(1);
                self.scrubber.set_upper_bound(upper as f64);
            }
            Err(err) => {
                self.state = InitState::Failed;
                error!(error = %err, "Failed to display map");
            }
        }
    }

    /// Handle a scrubber value change.
    ///
    /// The scrubber carries a continuous value; only changes of the
    /// truncated integer are meaningful, so sub-integer jitter is ignored.
    pub fn on_scrubber_changed(&mut self, previous: f64, current: f64) {
        if previous.floor() as i64 == current.floor() as i64 {
            return;
        }
        let index = current.floor() as i64;
        if index < 0 {
            return;
        }
        self.move_position_marker(index as usize);
    }

    /// Move (or first create) the position marker and show the tooltip.
    ///
    /// An out-of-range index or a sample without a position skips silently:
    /// the previous marker and tooltip stay where they were.
    fn move_position_marker(&mut self, index: usize) {
        let Some(position) = self.exercise.samples.get(index).and_then(|s| s.position) else {
            return;
        };

        match &self.position_marker {
            None => {
                let handle =
                    self.map
                        .add_marker(position, "", MarkerColor::Blue, POSITION_MARKER_PRIORITY);
                self.position_marker = Some(handle);
            }
            Some(handle) => self.map.move_marker(handle, position),
        }

        let text = tooltip::build_tooltip(
            &self.exercise.samples[index],
            index,
            &self.format,
            self.speed_mode,
            &self.messages,
        );
        let anchor = tooltip_anchor(&self.tooltip.container_geometry());
        self.tooltip.show(&text, anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::{Lap, RecordingMode, Sample};
    use crate::geo::GeoPosition;
    use crate::map::{MapCall, MockMapSurface};
    use crate::ui::tests::{MockScrubber, MockTooltipHost};
    use crate::ui::{ContainerGeometry, ScreenPoint};

    type TestController = TrackController<MockMapSurface, MockTooltipHost, MockScrubber>;

    fn positioned_sample(lat: f64, lon: f64) -> Sample {
        Sample {
            position: Some(GeoPosition::new(lat, lon)),
            ..Default::default()
        }
    }

    fn located_exercise(samples: Vec<Sample>, laps: Vec<Lap>) -> Arc<Exercise> {
        Arc::new(Exercise {
            recording: RecordingMode {
                location: true,
                ..Default::default()
            },
            samples,
            laps,
            ..Default::default()
        })
    }

    fn controller(exercise: Arc<Exercise>) -> TestController {
        controller_with_map(exercise, MockMapSurface::default())
    }

    fn controller_with_map(exercise: Arc<Exercise>, map: MockMapSurface) -> TestController {
        TrackController::new(
            exercise,
            UnitSystem::Metric,
            SpeedMode::Speed,
            Arc::new(Messages::english()),
            map,
            MockTooltipHost::default(),
            MockScrubber::default(),
        )
    }

    fn three_sample_exercise() -> Arc<Exercise> {
        located_exercise(
            vec![
                positioned_sample(53.0, 9.0),
                Sample {
                    heart_rate: Some(120),
                    ..Default::default()
                },
                positioned_sample(53.2, 9.2),
            ],
            vec![],
        )
    }

    #[tokio::test]
    async fn test_request_display_is_idempotent() {
        let mut controller = controller(three_sample_exercise());

        controller.request_display().await;
        controller.request_display().await;
        controller.request_display().await;

        assert_eq!(controller.map.display_calls, 1);
        assert_eq!(controller.map.added_tracks().len(), 1);
        assert_eq!(controller.state(), InitState::Ready);
    }

    #[tokio::test]
    async fn test_request_display_skips_exercise_without_location() {
        let exercise = Arc::new(Exercise {
            samples: vec![Sample::default()],
            ..Default::default()
        });
        let mut controller = controller(exercise);

        controller.request_display().await;

        assert_eq!(controller.map.display_calls, 0);
        assert_eq!(controller.state(), InitState::NotRequested);
    }

    #[tokio::test]
    async fn test_successful_display_arms_scrubber() {
        let mut controller = controller(three_sample_exercise());

        controller.request_display().await;

        assert_eq!(controller.scrubber.upper_bound, Some(2.0));
    }

    #[tokio::test]
    async fn test_load_failure_is_terminal() {
        let exercise = three_sample_exercise();
        let mut controller =
            controller_with_map(exercise, MockMapSurface::failing("tiles unreachable"));

        controller.request_display().await;

        assert_eq!(controller.state(), InitState::Failed);
        // scrubber stays unarmed, nothing is drawn
        assert_eq!(controller.scrubber.upper_bound, None);
        assert!(controller.map.calls.is_empty());

        // no retry: a second request does not issue another load
        controller.request_display().await;
        assert_eq!(controller.map.display_calls, 1);
        assert_eq!(controller.state(), InitState::Failed);
    }

    #[tokio::test]
    async fn test_static_render_draws_laps_start_end() {
        let exercise = located_exercise(
            vec![positioned_sample(53.0, 9.0), positioned_sample(53.5, 9.5)],
            vec![
                Lap {
                    position_split: Some(GeoPosition::new(53.1, 9.1)),
                    ..Default::default()
                },
                Lap {
                    position_split: Some(GeoPosition::new(53.2, 9.2)),
                    ..Default::default()
                },
                Lap {
                    position_split: Some(GeoPosition::new(53.5, 9.5)),
                    ..Default::default()
                },
            ],
        );
        let mut controller = controller(exercise);

        controller.request_display().await;

        // 3 laps draw 2 lap markers, plus start and end
        let markers = controller.map.added_markers();
        assert_eq!(markers.len(), 4);

        let mut lap_priorities = Vec::new();
        let mut start_priority = None;
        let mut end_priority = None;
        for call in markers {
            let MapCall::AddMarker {
                color, z_priority, ..
            } = call
            else {
                unreachable!();
            };
            match color {
                MarkerColor::Grey => lap_priorities.push(*z_priority),
                MarkerColor::Green => start_priority = Some(*z_priority),
                MarkerColor::Red => end_priority = Some(*z_priority),
                MarkerColor::Blue => panic!("no position marker expected"),
            }
        }

        // z-order: every lap marker below start, start below end
        let start = start_priority.unwrap();
        let end = end_priority.unwrap();
        assert!(start < end);
        assert!(lap_priorities.iter().all(|p| *p < start));
    }

    #[test]
    fn test_scrubber_jitter_is_debounced() {
        let mut controller = controller(three_sample_exercise());

        controller.on_scrubber_changed(0.1, 0.9);
        controller.on_scrubber_changed(2.0, 2.7);

        assert!(controller.map.calls.is_empty());
        assert!(controller.tooltip.shown.is_empty());
    }

    #[test]
    fn test_marker_created_once_then_moved() {
        let exercise = located_exercise(
            vec![
                positioned_sample(53.0, 9.0),
                positioned_sample(53.1, 9.1),
                positioned_sample(53.2, 9.2),
            ],
            vec![],
        );
        let mut controller = controller(exercise);

        controller.on_scrubber_changed(0.0, 1.0);
        controller.on_scrubber_changed(1.0, 2.0);
        controller.on_scrubber_changed(2.0, 0.5);

        assert_eq!(controller.map.added_markers().len(), 1);
        assert_eq!(controller.map.moved_markers().len(), 2);

        // every move targets the handle created first
        let MapCall::AddMarker { handle, color, z_priority, .. } =
            controller.map.added_markers()[0].clone()
        else {
            unreachable!();
        };
        assert_eq!(color, MarkerColor::Blue);
        assert_eq!(z_priority, POSITION_MARKER_PRIORITY);
        for call in controller.map.moved_markers() {
            let MapCall::MoveMarker { handle: moved, .. } = call else {
                unreachable!();
            };
            assert_eq!(*moved, handle);
        }
    }

    #[test]
    fn test_sample_without_position_skips_silently() {
        let mut controller = controller(three_sample_exercise());

        // index 1 has no position: no marker, no tooltip
        controller.on_scrubber_changed(0.0, 1.0);

        assert!(controller.map.calls.is_empty());
        assert!(controller.tooltip.shown.is_empty());
    }

    #[test]
    fn test_out_of_range_index_skips_silently() {
        let mut controller = controller(three_sample_exercise());

        controller.on_scrubber_changed(2.0, 17.0);
        controller.on_scrubber_changed(0.0, -3.0);

        assert!(controller.map.calls.is_empty());
        assert!(controller.tooltip.shown.is_empty());
    }

    #[test]
    fn test_sparse_position_scenario() {
        // positions at indices 0 and 2 only
        let mut controller = controller(three_sample_exercise());

        // scrub to index 2: marker created at sample 2's position
        controller.on_scrubber_changed(0.0, 2.0);
        assert_eq!(controller.map.added_markers().len(), 1);

        // scrub to index 1: no change from the prior state
        controller.on_scrubber_changed(2.0, 1.0);
        assert_eq!(controller.map.calls.len(), 1);
        assert_eq!(controller.tooltip.shown.len(), 1);

        // the tooltip shows the 1-based index "3"
        let (text, _) = &controller.tooltip.shown[0];
        assert!(text.starts_with("Trackpoint: 3\n"));
    }

    #[test]
    fn test_tooltip_anchored_to_container() {
        let exercise = located_exercise(vec![positioned_sample(53.0, 9.0)], vec![]);
        let mut controller = controller(exercise);
        controller.tooltip.geometry = ContainerGeometry {
            scene_origin: ScreenPoint::new(50.0, 100.0),
            window_origin: ScreenPoint::new(400.0, 300.0),
        };

        controller.on_scrubber_changed(1.0, 0.0);

        let (_, anchor) = &controller.tooltip.shown[0];
        assert_eq!(*anchor, ScreenPoint::new(458.0, 408.0));
    }

    #[tokio::test]
    async fn test_empty_path_draws_no_track_or_markers() {
        let exercise = located_exercise(vec![Sample::default(), Sample::default()], vec![]);
        let mut controller = controller(exercise);

        controller.request_display().await;

        assert_eq!(controller.state(), InitState::Ready);
        assert!(controller.map.calls.is_empty());
        // the scrubber is still armed; scrubbing just never draws
        assert_eq!(controller.scrubber.upper_bound, Some(1.0));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_same_integer_value_never_updates(
                base in -1000.0..1000.0_f64,
                frac_a in 0.0..0.99_f64,
                frac_b in 0.0..0.99_f64,
            ) {
                let floor = base.floor();
                let mut controller = controller(three_sample_exercise());

                controller.on_scrubber_changed(floor + frac_a, floor + frac_b);

                prop_assert!(controller.map.calls.is_empty());
                prop_assert!(controller.tooltip.shown.is_empty());
            }
        }
    }
}
