//! UI collaborator boundary: screen geometry and control traits.
//!
//! The track controller never touches widgets directly. It talks to the
//! scrubber and the tooltip through the traits defined here, so the core
//! stays testable without a windowing toolkit. The tooltip positioner is a
//! pure function over the container's screen geometry.

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the map container sits on screen.
///
/// Windows move, so this is queried fresh on every tooltip display.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerGeometry {
    /// Origin of the map container within its scene.
    pub scene_origin: ScreenPoint,
    /// Origin of the window (including its scene offset) on the screen.
    pub window_origin: ScreenPoint,
}

/// Local offset of the tooltip anchor within the map container.
const TOOLTIP_LOCAL_OFFSET: f64 = 8.0;

/// Compute the global screen anchor for the tooltip.
///
/// The tooltip is anchored near the upper-left corner of the map container:
/// a fixed (8,8) local offset translated by the container's scene origin and
/// the window's screen origin.
pub fn tooltip_anchor(geometry: &ContainerGeometry) -> ScreenPoint {
    ScreenPoint::new(
        TOOLTIP_LOCAL_OFFSET + geometry.scene_origin.x + geometry.window_origin.x,
        TOOLTIP_LOCAL_OFFSET + geometry.scene_origin.y + geometry.window_origin.y,
    )
}

/// Host for the sample-details tooltip.
pub trait TooltipHost {
    /// Current screen geometry of the map container.
    fn container_geometry(&self) -> ContainerGeometry;

    /// Display the tooltip with the given text at a screen anchor.
    fn show(&mut self, text: &str, anchor: ScreenPoint);
}

/// The timeline scrubber control.
///
/// The scrubber owns a continuous value in a bounded range and notifies the
/// controller of every value change; the controller only ever sets the
/// upper bound, once, after the map surface is ready.
pub trait ScrubberControl {
    /// Set the upper bound of the scrubber range.
    fn set_upper_bound(&mut self, max: f64);
}
