//! Single-file conversion: stage, encode, publish.
//!
//! The encoder never writes to the target path. It writes into a staging file
//! that lives only as long as this call; the staged bytes are copied to the
//! target once the encoder has exited successfully.

use crate::EncodeResult;
use crate::config::{CONTAINER_EXTENSION, CoreConfig, TEMP_FILE_PREFIX};
use crate::discovery::ConversionJob;
use crate::error::{CoreResult, command_failed_error};
use crate::external::{FfmpegOutputHandler, FfmpegProcess, FfmpegSpawner, build_encode_command};
use crate::temp_files::create_temp_file;

use log::debug;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Re-encodes `job.source` into `job.target`.
///
/// The target's parent directory must already exist. On error nothing is
/// left at the target path and the staging file is gone.
pub fn convert_file<S: FfmpegSpawner>(
    spawner: &S,
    config: &CoreConfig,
    job: &ConversionJob,
) -> CoreResult<EncodeResult> {
    let start_time = Instant::now();
    let input_size = fs::metadata(&job.source.path)?.len();

    let staging = create_temp_file(&config.staging_dir(), TEMP_FILE_PREFIX, CONTAINER_EXTENSION)?;
    debug!("Staging output in {}", staging.path().display());

    run_encoder(spawner, &config.ffmpeg_path, &job.source.path, staging.path())?;
    let output_size = publish(staging.path(), &job.target)?;

    Ok(EncodeResult {
        relative_path: job.source.relative.clone(),
        duration: start_time.elapsed(),
        input_size,
        output_size,
    })
}

fn run_encoder<S: FfmpegSpawner>(
    spawner: &S,
    ffmpeg_path: &Path,
    input: &Path,
    output: &Path,
) -> CoreResult<()> {
    let cmd = build_encode_command(ffmpeg_path, input, output);
    debug!("FFmpeg command: {cmd:?}");

    let mut process = spawner.spawn(cmd)?;
    let mut handler = FfmpegOutputHandler::new();
    let status = process.run_to_completion(&mut handler)?;

    if status.success() {
        debug!("ffmpeg finished successfully for {}", input.display());
        Ok(())
    } else {
        Err(command_failed_error(
            "ffmpeg",
            status,
            handler.stderr_tail(),
        ))
    }
}

/// Copies the staged output to its final location and returns its size.
fn publish(staged: &Path, target: &Path) -> CoreResult<u64> {
    match fs::copy(staged, target) {
        Ok(bytes) => {
            debug!("Published {} bytes to {}", bytes, target.display());
            Ok(bytes)
        }
        Err(e) => {
            if let Err(remove_err) = fs::remove_file(target) {
                if remove_err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!(
                        "Failed to remove partial output {}: {}",
                        target.display(),
                        remove_err
                    );
                }
            }
            Err(e.into())
        }
    }
}
