//! Track viewer core.
//!
//! This module contains the stateful heart of the viewer: the
//! [`TrackController`] with its one-shot map initialization and
//! scrubber-to-marker synchronization, the one-time static render pass for
//! track and lap markers, and the tooltip content builder.
//!
//! Everything here talks to the outside world through the collaborator
//! boundaries in [`crate::map`] and [`crate::ui`].

mod controller;
mod render;
mod tooltip;

pub use controller::{InitState, TrackController};
pub use render::{draw_track_and_laps, lap_positions, sample_positions};
pub use tooltip::build_tooltip;
