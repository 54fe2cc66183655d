//! Tooltip preview command.

use std::path::Path;

use trackview::config::ConfigFile;
use trackview::exercise::Exercise;
use trackview::format::FormatUtils;
use trackview::i18n::Messages;
use trackview::track::build_tooltip;

use crate::error::CliError;

/// Print the tooltip text for a sample, exactly as the map would show it.
pub fn run(file: &Path, sample: usize) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let exercise = Exercise::from_json_file(file)?;

    if sample == 0 || sample > exercise.samples.len() {
        return Err(CliError::InvalidArgument(format!(
            "sample {} out of range 1..={}",
            sample,
            exercise.samples.len()
        )));
    }
    let index = sample - 1;

    let format = FormatUtils::new(config.display.units);
    let text = build_tooltip(
        &exercise.samples[index],
        index,
        &format,
        config.display.speed_mode,
        &Messages::english(),
    );
    print!("{}", text);

    Ok(())
}
