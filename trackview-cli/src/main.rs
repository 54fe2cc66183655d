//! TrackView CLI - inspect and render recorded activity tracks.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "trackview", version, about = "Recorded activity track viewer")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides this).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a summary of an exercise file
    Info {
        /// Exercise JSON file
        file: PathBuf,
    },
    /// Print the map tooltip text for a sample
    Tooltip {
        /// Exercise JSON file
        file: PathBuf,
        /// Sample number (1-based, as displayed)
        #[arg(short, long)]
        sample: usize,
    },
    /// Render the track and its markers to a PNG image
    Render {
        /// Exercise JSON file
        file: PathBuf,
        /// Output image path
        #[arg(short, long, default_value = "track.png")]
        output: PathBuf,
        /// Place the position marker at this sample (1-based)
        #[arg(short, long)]
        sample: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    trackview::logging::init(cli.verbose);

    let result = match cli.command {
        Command::Info { file } => commands::info::run(&file),
        Command::Tooltip { file, sample } => commands::tooltip::run(&file, sample),
        Command::Render {
            file,
            output,
            sample,
        } => commands::render::run(&file, &output, sample).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
