//! Batch driver: walk the source tree, skip what exists, convert the rest.
//!
//! The first failing conversion ends the batch. Files published before it
//! stay in place, so the next run resumes at the file that failed.

use crate::BatchSummary;
use crate::config::CoreConfig;
use crate::discovery::{ConversionJob, find_processable_files};
use crate::error::{CoreError, CoreResult};
use crate::external::FfmpegSpawner;
use crate::processing::convert::convert_file;
use crate::terminal_output;

use log::info;
use std::fs;
use std::io;

/// Converts every `.mkv` under the source root that is missing from the target tree.
///
/// Fails before touching the filesystem when the roots resolve to the same
/// directory. Any conversion failure is returned as [`CoreError::Conversion`]
/// naming the source file; reporting it is left to the caller.
pub fn process_videos<S: FfmpegSpawner>(spawner: &S, config: &CoreConfig) -> CoreResult<BatchSummary> {
    let roots = config.resolve_roots()?;

    terminal_output::print_status("Source", &roots.source.display().to_string(), false);
    terminal_output::print_status("Target", &roots.target.display().to_string(), false);

    let mut summary = BatchSummary::default();

    for source in find_processable_files(&roots) {
        let job = ConversionJob::plan(&roots, source);
        let relative = job.source.relative.display().to_string();

        if job.target.exists() {
            info!("Skipping existing file {relative}");
            summary.skipped.push(job.source.relative);
            continue;
        }

        if let Some(parent) = job.target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CoreError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to create target directory '{}': {}", parent.display(), e),
                ))
            })?;
        }

        terminal_output::print_processing(&format!(
            "Converting file {}: {} -> {}",
            relative,
            job.source.path.display(),
            job.target.display()
        ));

        match convert_file(spawner, config, &job) {
            Ok(result) => {
                terminal_output::print_success(&format!("Converted {relative}"));
                summary.converted.push(result);
            }
            Err(e) => {
                return Err(CoreError::Conversion {
                    path: job.source.path,
                    cause: Box::new(e),
                });
            }
        }
    }

    Ok(summary)
}
