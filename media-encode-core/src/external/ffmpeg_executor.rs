// ============================================================================
// media-encode-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Running One Encoder Process to Completion
//
// KEY COMPONENTS:
// - FfmpegProcess: a started encoder that can be driven until it exits
// - FfmpegSpawner: starts an FfmpegProcess from a built command
// - SidecarSpawner: the real implementation on top of ffmpeg-sidecar
//
// The conversion code is generic over FfmpegSpawner so tests can substitute
// a spawner that never launches a real encoder.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::external::ffmpeg::FfmpegOutputHandler;
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::process::ExitStatus;

/// A started encoder.
pub trait FfmpegProcess {
    /// Feeds every output event to `output` until the stream ends, then
    /// waits for the process and returns its exit status.
    ///
    /// A non-zero status is returned as a value, not as an error; the caller
    /// decides what it means and can read the captured stderr from `output`.
    fn run_to_completion(&mut self, output: &mut FfmpegOutputHandler) -> CoreResult<ExitStatus>;
}

/// Starts encoder processes.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    /// Fails with [`crate::CoreError::CommandStart`] when the binary cannot be launched.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// An encoder launched through `ffmpeg-sidecar`.
pub struct SidecarProcess {
    child: FfmpegChild,
}

impl FfmpegProcess for SidecarProcess {
    fn run_to_completion(&mut self, output: &mut FfmpegOutputHandler) -> CoreResult<ExitStatus> {
        let events = self.child.iter().map_err(|e| {
            command_failed_error("ffmpeg", ExitStatus::default(), format!("no output stream: {e}"))
        })?;
        for event in events {
            output.handle_event(event)?;
        }

        self.child
            .wait()
            .map_err(|e| command_wait_error("ffmpeg", e))
    }
}

/// Spawns the real encoder binary named in the command.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let child = cmd.spawn().map_err(|e| command_start_error("ffmpeg", e))?;
        Ok(SidecarProcess { child })
    }
}
