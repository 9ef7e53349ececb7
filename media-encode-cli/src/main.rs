//! Main entry point for the media-encode CLI application.
//!
//! Parses the arguments, installs the logger, and runs the batch with the
//! real ffmpeg spawner. Any failure is reported once and exits with status 1.

use media_encode::error::{EXIT_FAILURE, suggestion_for};
use media_encode::logging::run_log_path;
use media_encode::{parse_cli, run_encode};
use media_encode_core::external::SidecarSpawner;
use media_encode_core::logging::setup_logging;
use media_encode_core::terminal_output;

use log::LevelFilter;
use std::process;

fn main() {
    let cli_args = parse_cli();

    let log_level = if cli_args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file = cli_args.log_dir.as_deref().map(run_log_path);
    if let Err(e) = setup_logging(log_level, log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e:#}");
        process::exit(EXIT_FAILURE);
    }

    if let Some(log_file) = &log_file {
        log::debug!("Writing log file to {}", log_file.display());
    }

    if let Err(e) = run_encode(&SidecarSpawner, &cli_args) {
        terminal_output::print_error("Run aborted", &e.to_string(), suggestion_for(&e));
        process::exit(EXIT_FAILURE);
    }
}
