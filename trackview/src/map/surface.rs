//! The map surface trait.

use std::future::Future;
use std::pin::Pin;

use crate::geo::GeoPosition;

use super::types::{MapConfig, MapError, MarkerColor, MarkerHandle};

/// Boxed future type for dyn-compatible async methods.
///
/// Deliberately without a `Send` bound: the map surface belongs to the
/// single UI-bound thread of control and its futures are awaited in place.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A surface that can display a map, a track line and markers.
///
/// The surface is stateful and owned by exactly one controller. Loading is
/// the only asynchronous operation; everything else is a plain call whose
/// effect becomes visible whenever the backend renders next.
///
/// # Marker stacking
///
/// `z_priority` orders markers on the surface: higher priorities are drawn
/// on top of lower ones. Equal priorities draw in insertion order.
pub trait MapSurface {
    /// Load the surface with the given declarative configuration.
    ///
    /// Completes exactly once with success or a terminal [`MapError`].
    /// Callers must not issue drawing operations before completion.
    fn display_map(&mut self, config: MapConfig) -> BoxFuture<'_, Result<(), MapError>>;

    /// Draw the full track as one continuous line.
    fn add_track(&mut self, positions: &[GeoPosition]);

    /// Create a marker and return its handle.
    fn add_marker(
        &mut self,
        position: GeoPosition,
        label: &str,
        color: MarkerColor,
        z_priority: u32,
    ) -> MarkerHandle;

    /// Move an existing marker to a new position.
    fn move_marker(&mut self, handle: &MarkerHandle, position: GeoPosition);
}
