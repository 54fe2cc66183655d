//! Map configuration and marker types.

use thiserror::Error;

/// Errors that can occur on the map surface.
#[derive(Debug, Clone, Error)]
pub enum MapError {
    /// The map surface failed to load.
    #[error("Map surface failed to load: {0}")]
    LoadFailed(String),

    /// A drawing operation failed.
    #[error("Render failed: {0}")]
    Render(String),

    /// Writing the rendered output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Opaque identifier for a marker created on a map surface.
///
/// Handles are minted by the surface and only ever handed back to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    /// Create a handle. Called by map surface implementations only.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id, for surface-internal bookkeeping.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Marker color tier.
///
/// Colors carry the viewer's marker semantics: blue for the moving position
/// marker, grey for lap splits, green and red for the track start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Blue,
    Grey,
    Green,
    Red,
}

/// Base tile layers a map surface can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLayer {
    OpenStreetMap,
    OpenCycleMap,
    HikeBikeMap,
    MtbMap,
}

impl MapLayer {
    /// Tile URL template for this layer (`{z}`/`{x}`/`{y}` placeholders).
    pub fn tile_url_template(&self) -> &'static str {
        match self {
            MapLayer::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            MapLayer::OpenCycleMap => "https://tile.thunderforest.com/cycle/{z}/{x}/{y}.png",
            MapLayer::HikeBikeMap => "https://tiles.wmflabs.org/hikebike/{z}/{x}/{y}.png",
            MapLayer::MtbMap => "http://tile.mtbmap.cz/mtbmap_tiles/{z}/{x}/{y}.png",
        }
    }
}

/// Placement of a map control within the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Zoom control configuration.
#[derive(Debug, Clone, Copy)]
pub struct ZoomControlConfig {
    /// Whether the zoom control is shown.
    pub shown: bool,
    /// Where the control is placed.
    pub position: ControlPosition,
}

impl Default for ZoomControlConfig {
    fn default() -> Self {
        Self {
            shown: true,
            position: ControlPosition::BottomLeft,
        }
    }
}

/// Scale control configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScaleControlConfig {
    /// Whether the scale control is shown.
    pub shown: bool,
    /// Where the control is placed.
    pub position: ControlPosition,
    /// Whether the scale is labeled in metric units.
    pub metric: bool,
}

impl Default for ScaleControlConfig {
    fn default() -> Self {
        Self {
            shown: true,
            position: ControlPosition::BottomLeft,
            metric: true,
        }
    }
}

/// Declarative map surface configuration passed to the one-shot load.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Selectable base layers; the first entry is the initial layer.
    pub layers: Vec<MapLayer>,
    /// Zoom control placement.
    pub zoom_control: ZoomControlConfig,
    /// Scale control placement and units.
    pub scale_control: ScaleControlConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            layers: vec![MapLayer::OpenStreetMap],
            zoom_control: ZoomControlConfig::default(),
            scale_control: ScaleControlConfig::default(),
        }
    }
}
