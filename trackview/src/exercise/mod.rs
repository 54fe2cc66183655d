//! Recorded-activity data model.
//!
//! An [`Exercise`] is the ordered timeline of a recorded activity: a sample
//! list, a lap list, and the set of channels the device recorded. Samples
//! are sparse. Every metric is independently optional, and consumers are
//! expected to skip absent values rather than treat them as errors.
//!
//! The model is read-only for the rest of the crate: sample order is
//! chronological and fixed after load.

mod model;

pub use model::{Exercise, ExerciseError, Lap, RecordingMode, Sample};
