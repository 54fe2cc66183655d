//! Geographic value types.
//!
//! Positions are WGS84 latitude/longitude pairs in degrees, the coordinate
//! system produced by GPS receivers and consumed by map tile services.
//! Bounds are derived from positions, never stored independently.

use serde::{Deserialize, Serialize};

/// A geographic position (latitude/longitude pair in degrees).
///
/// Immutable value type. Latitude is positive north, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

impl GeoPosition {
    /// Create a new geographic position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check whether the position has finite, in-range coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Geographic bounding box derived from a set of positions.
#[derive(Debug, Clone, Copy)]
pub struct GeoBounds {
    /// Minimum (southernmost) latitude.
    pub min_lat: f64,
    /// Maximum (northernmost) latitude.
    pub max_lat: f64,
    /// Minimum (westernmost) longitude.
    pub min_lon: f64,
    /// Maximum (easternmost) longitude.
    pub max_lon: f64,
}

impl GeoBounds {
    /// Create a bounding box from a single position.
    pub fn from_position(position: GeoPosition) -> Self {
        Self {
            min_lat: position.latitude,
            max_lat: position.latitude,
            min_lon: position.longitude,
            max_lon: position.longitude,
        }
    }

    /// Create the minimum bounding box containing all positions.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_positions(positions: &[GeoPosition]) -> Option<Self> {
        let (first, rest) = positions.split_first()?;
        let mut bounds = Self::from_position(*first);
        for position in rest {
            bounds.expand(*position);
        }
        Some(bounds)
    }

    /// Expand this bounding box to include a position.
    pub fn expand(&mut self, position: GeoPosition) {
        self.min_lat = self.min_lat.min(position.latitude);
        self.max_lat = self.max_lat.max(position.latitude);
        self.min_lon = self.min_lon.min(position.longitude);
        self.max_lon = self.max_lon.max(position.longitude);
    }

    /// Get the center of the bounds.
    pub fn center(&self) -> GeoPosition {
        GeoPosition::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}
