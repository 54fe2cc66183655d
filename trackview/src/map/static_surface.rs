//! Static map surface rendering to a PNG.
//!
//! [`StaticMapSurface`] implements [`MapSurface`] on top of the `staticmap`
//! tile compositor. Drawing operations only record state; the actual tile
//! download and compositing happen when [`StaticMapSurface::save_png`] is
//! called, so a full controller flow (load, static render pass, marker
//! updates) can run before anything touches the network.

use std::path::Path;

use staticmap::tools::{CircleBuilder, Color, LineBuilder};
use staticmap::StaticMapBuilder;

use crate::geo::GeoPosition;

use super::surface::{BoxFuture, MapSurface};
use super::types::{MapConfig, MapError, MarkerColor, MarkerHandle};

/// Line width of the rendered track, in pixels.
const TRACK_LINE_WIDTH: f32 = 3.0;

/// Radius of rendered markers, in pixels.
const MARKER_RADIUS: f32 = 6.0;

#[derive(Debug, Clone)]
struct StaticMarker {
    handle: MarkerHandle,
    position: GeoPosition,
    color: MarkerColor,
    z_priority: u32,
}

/// Map surface that composes tiles and overlays into a PNG image.
#[derive(Debug)]
pub struct StaticMapSurface {
    width: u32,
    height: u32,
    /// Tile URL override taking precedence over the configured base layer.
    override_url: Option<String>,
    /// Chosen at load time; `None` until `display_map` succeeded.
    url_template: Option<String>,
    track: Vec<GeoPosition>,
    markers: Vec<StaticMarker>,
    next_handle: u64,
}

impl StaticMapSurface {
    /// Create a surface with the given output dimensions in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            override_url: None,
            url_template: None,
            track: Vec::new(),
            markers: Vec::new(),
            next_handle: 0,
        }
    }

    /// Use a custom tile URL template instead of the configured base layer.
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.override_url = Some(template.into());
        self
    }

    /// Whether `display_map` has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.url_template.is_some()
    }

    /// Markers in draw order: ascending stacking priority, insertion order
    /// within equal priorities.
    fn markers_in_draw_order(&self) -> Vec<&StaticMarker> {
        let mut ordered: Vec<&StaticMarker> = self.markers.iter().collect();
        ordered.sort_by_key(|m| m.z_priority);
        ordered
    }

    /// Render the recorded track and markers and write a PNG.
    ///
    /// Downloads the required tiles from the configured tile service.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let url_template = self.url_template.as_deref().ok_or_else(|| {
            MapError::LoadFailed("map surface has not been displayed".to_string())
        })?;

        if self.track.is_empty() && self.markers.is_empty() {
            return Err(MapError::Render(
                "nothing to render: no track and no markers".to_string(),
            ));
        }

        let mut map = StaticMapBuilder::default()
            .width(self.width)
            .height(self.height)
            .url_template(url_template)
            .build()
            .map_err(|e| MapError::Render(e.to_string()))?;

        if !self.track.is_empty() {
            let line = LineBuilder::default()
                .lat_coordinates(self.track.iter().map(|p| p.latitude).collect::<Vec<_>>())
                .lon_coordinates(self.track.iter().map(|p| p.longitude).collect::<Vec<_>>())
                .width(TRACK_LINE_WIDTH)
                .simplify(true)
                .color(Color::new(true, 30, 100, 220, 255))
                .build()
                .map_err(|e| MapError::Render(e.to_string()))?;
            map.add_tool(line);
        }

        for marker in self.markers_in_draw_order() {
            let circle = CircleBuilder::default()
                .lat_coordinate(marker.position.latitude)
                .lon_coordinate(marker.position.longitude)
                .radius(MARKER_RADIUS)
                .color(marker_color(marker.color))
                .build()
                .map_err(|e| MapError::Render(e.to_string()))?;
            map.add_tool(circle);
        }

        map.save_png(path.as_ref())
            .map_err(|e| MapError::Io(e.to_string()))
    }
}

fn marker_color(color: MarkerColor) -> Color {
    match color {
        MarkerColor::Blue => Color::new(true, 30, 100, 220, 255),
        MarkerColor::Grey => Color::new(true, 128, 128, 128, 255),
        MarkerColor::Green => Color::new(true, 30, 160, 70, 255),
        MarkerColor::Red => Color::new(true, 220, 40, 40, 255),
    }
}

impl MapSurface for StaticMapSurface {
    fn display_map(&mut self, config: MapConfig) -> BoxFuture<'_, Result<(), MapError>> {
        let template = self
            .override_url
            .clone()
            .or_else(|| {
                config
                    .layers
                    .first()
                    .map(|layer| layer.tile_url_template().to_string())
            });

        let result = match template {
            Some(template) => {
                self.url_template = Some(template);
                Ok(())
            }
            None => Err(MapError::LoadFailed(
                "no base layer configured".to_string(),
            )),
        };

        Box::pin(std::future::ready(result))
    }

    fn add_track(&mut self, positions: &[GeoPosition]) {
        self.track = positions.to_vec();
    }

    fn add_marker(
        &mut self,
        position: GeoPosition,
        _label: &str,
        color: MarkerColor,
        z_priority: u32,
    ) -> MarkerHandle {
        // The static compositor has no text tool; labels are not rendered.
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.markers.push(StaticMarker {
            handle: handle.clone(),
            position,
            color,
            z_priority,
        });
        handle
    }

    fn move_marker(&mut self, handle: &MarkerHandle, position: GeoPosition) {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.handle == *handle) {
            marker.position = position;
        }
    }
}
