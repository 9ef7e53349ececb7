//! Implementation of the batch re-encode run.
//!
//! Builds the core configuration from the parsed arguments, hands the run to
//! media-encode-core and reports what happened.

use crate::cli::Cli;
use crate::error::CliResult;

use media_encode_core::external::FfmpegSpawner;
use media_encode_core::{
    BatchSummary, CoreConfig, calculate_size_reduction, format_bytes, format_duration,
    process_videos, terminal_output,
};

use log::debug;
use std::time::{Duration, Instant};

/// Creates the core configuration from CLI arguments.
pub fn create_core_config(args: &Cli) -> CoreConfig {
    let mut config = CoreConfig::new(args.source_dir.clone(), args.target_dir.clone());
    config.ffmpeg_path = args.ffmpeg.clone();
    config.temp_dir = args.temp_dir.clone();
    config
}

/// Runs the batch and prints the summary. The first error aborts the run.
pub fn run_encode<S: FfmpegSpawner>(spawner: &S, args: &Cli) -> CliResult<BatchSummary> {
    let config = create_core_config(args);
    debug!("Core configuration: {config:?}");

    terminal_output::print_section("Media encoder");

    let start_time = Instant::now();
    let summary = process_videos(spawner, &config)?;

    handle_encoding_results(&summary, start_time.elapsed());
    Ok(summary)
}

fn handle_encoding_results(summary: &BatchSummary, total_elapsed: Duration) {
    terminal_output::print_section("Summary");

    for result in &summary.converted {
        terminal_output::print_subsection(&result.relative_path.display().to_string());
        terminal_output::print_status(
            "Encode time",
            &format_duration(result.duration.as_secs_f64()),
            false,
        );
        terminal_output::print_status("Input size", &format_bytes(result.input_size), false);
        terminal_output::print_status("Output size", &format_bytes(result.output_size), false);
        terminal_output::print_status(
            "Reduced by",
            &format!(
                "{}%",
                calculate_size_reduction(result.input_size, result.output_size)
            ),
            true,
        );
    }

    if !summary.converted.is_empty() {
        terminal_output::print_subsection("Totals");
    }
    terminal_output::print_status("Converted", &summary.converted.len().to_string(), true);
    terminal_output::print_status("Skipped", &summary.skipped.len().to_string(), false);
    terminal_output::print_status(
        "Total time",
        &format_duration(total_elapsed.as_secs_f64()),
        false,
    );

    terminal_output::print_success(&format!(
        "Processed {} file(s)",
        summary.converted.len() + summary.skipped.len()
    ));
}
