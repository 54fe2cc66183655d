//! TrackView - recorded-activity track viewing on a map surface
//!
//! This library lets a reviewer scrub through a recorded activity's
//! timeline and see the corresponding geographic position, the full path,
//! and per-lap markers on a map surface, with a tooltip summarizing sample
//! metrics at the scrubbed point.
//!
//! The heart of the crate is [`track::TrackController`]: a one-shot lazy
//! map initialization state machine plus the integer-debounced
//! scrubber-to-marker synchronization. The controller talks to the outside
//! world through narrow collaborator traits ([`map::MapSurface`],
//! [`ui::TooltipHost`], [`ui::ScrubberControl`]), so it can be driven by an
//! interactive frontend, by the bundled [`map::StaticMapSurface`] PNG
//! backend, or by mocks.

pub mod config;
pub mod exercise;
pub mod format;
pub mod geo;
pub mod i18n;
pub mod logging;
pub mod map;
pub mod track;
pub mod ui;
