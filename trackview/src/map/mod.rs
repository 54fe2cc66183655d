//! Map surface abstraction.
//!
//! This module provides the boundary between the track viewer core and the
//! actual map rendering backend. The [`MapSurface`] trait covers the four
//! operations the core needs: an asynchronous one-shot load, track drawing,
//! and marker creation/movement. Backends decide how those operations are
//! realized. [`StaticMapSurface`] renders to a PNG via tile compositing;
//! an interactive frontend would forward them to its widget layer.
//!
//! # Testability
//!
//! The mock surface used by controller and renderer tests lives in this
//! module next to the trait, so every consumer tests against the same
//! recording fake.

mod static_surface;
mod surface;
mod types;

pub use static_surface::StaticMapSurface;
pub use surface::{BoxFuture, MapSurface};
pub use types::{
    ControlPosition, MapConfig, MapError, MapLayer, MarkerColor, MarkerHandle, ScaleControlConfig,
    ZoomControlConfig,
};

#[cfg(test)]
pub use surface::tests::{MapCall, MockMapSurface};
