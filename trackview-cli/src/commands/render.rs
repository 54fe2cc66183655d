//! Track rendering command.
//!
//! Drives the full controller flow against the static map surface: one-shot
//! display request, static render pass, optional position marker, then PNG
//! output. Tile downloads happen at save time.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use trackview::config::ConfigFile;
use trackview::exercise::Exercise;
use trackview::i18n::Messages;
use trackview::map::StaticMapSurface;
use trackview::track::{InitState, TrackController};
use trackview::ui::{ContainerGeometry, ScreenPoint, ScrubberControl, TooltipHost};

use crate::error::CliError;

/// Tooltip host for headless rendering; tooltips have no surface to land on.
struct HeadlessTooltip;

impl TooltipHost for HeadlessTooltip {
    fn container_geometry(&self) -> ContainerGeometry {
        ContainerGeometry::default()
    }

    fn show(&mut self, _text: &str, _anchor: ScreenPoint) {}
}

/// Scrubber stand-in for headless rendering.
struct HeadlessScrubber;

impl ScrubberControl for HeadlessScrubber {
    fn set_upper_bound(&mut self, _max: f64) {}
}

/// Render the exercise track to a PNG image.
pub async fn run(file: &Path, output: &Path, sample: Option<usize>) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let exercise = Arc::new(Exercise::from_json_file(file)?);

    if !exercise.has_track_data() {
        return Err(CliError::InvalidArgument(
            "exercise has no positional recording".to_string(),
        ));
    }
    let sample_count = exercise.samples.len();

    let mut surface = StaticMapSurface::new(config.render.width, config.render.height);
    if let Some(url) = &config.render.tile_url {
        surface = surface.with_url_template(url.as_str());
    }

    let mut controller = TrackController::new(
        exercise,
        config.display.units,
        config.display.speed_mode,
        Arc::new(Messages::english()),
        surface,
        HeadlessTooltip,
        HeadlessScrubber,
    );

    controller.request_display().await;
    if controller.state() != InitState::Ready {
        return Err(CliError::Display(
            "map surface did not become ready".to_string(),
        ));
    }

    if let Some(sample) = sample {
        if sample == 0 || sample > sample_count {
            return Err(CliError::InvalidArgument(format!(
                "sample {} out of range 1..={}",
                sample, sample_count
            )));
        }
        // scrub from outside the range so the integer value always changes
        controller.on_scrubber_changed(-1.0, (sample - 1) as f64);
    }

    info!(output = %output.display(), "rendering track");
    controller.map().save_png(output)?;
    println!("Wrote {}", output.display());

    Ok(())
}
