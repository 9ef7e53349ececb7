//! ffmpeg command construction and output handling for the re-encode.

use crate::config::{
    AUDIO_BITRATE, AUDIO_CHANNELS, AUDIO_CODEC, CRF, PIXEL_FORMAT, STREAM_MAP, SUBTITLE_CODEC,
    SVT_AV1_PARAMS, SVT_AV1_PRESET, VIDEO_CODEC,
};
use crate::error::CoreResult;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel as FfmpegLogLevel};
use std::path::Path;

/// Number of trailing stderr error lines kept for the failure report.
const STDERR_TAIL_LINES: usize = 20;

/// Builds the fixed re-encode command from `input` into `output`.
///
/// Produces `-nostdin -hide_banner -y -i <input> -c:v libsvtav1 -crf 30
/// -preset 6 -pix_fmt yuv420p10le -svtav1-params ... -c:a libopus -b:a 128k
/// -ac 6 -c:s copy -map 0 <output>`.
pub fn build_encode_command(ffmpeg_path: &Path, input: &Path, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new_with_path(ffmpeg_path);

    cmd.args(["-nostdin", "-hide_banner", "-y"]);
    // Paths go through as OsStr so non-UTF-8 names reach ffmpeg byte for byte.
    cmd.arg("-i");
    cmd.arg(input);

    cmd.args(["-c:v", VIDEO_CODEC]);
    cmd.args(["-crf", &CRF.to_string()]);
    cmd.args(["-preset", &SVT_AV1_PRESET.to_string()]);
    cmd.args(["-pix_fmt", PIXEL_FORMAT]);
    cmd.args(["-svtav1-params", SVT_AV1_PARAMS]);

    cmd.args(["-c:a", AUDIO_CODEC]);
    cmd.args(["-b:a", AUDIO_BITRATE]);
    cmd.args(["-ac", &AUDIO_CHANNELS.to_string()]);

    cmd.args(["-c:s", SUBTITLE_CODEC]);
    cmd.args(["-map", STREAM_MAP]);

    cmd.arg(output);

    cmd
}

/// Consumes the event stream of one encoder run.
///
/// Nothing here decides success; the exit status does. Events are only
/// logged, and error lines are kept so a failure can be reported with them.
#[derive(Debug, Default)]
pub struct FfmpegOutputHandler {
    stderr_tail: Vec<String>,
}

impl FfmpegOutputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: FfmpegEvent) -> CoreResult<()> {
        match event {
            FfmpegEvent::Progress(progress) => {
                log::debug!(
                    target: "ffmpeg_log",
                    "frame={} time={} speed={:.2}x",
                    progress.frame,
                    progress.time,
                    progress.speed
                );
            }
            FfmpegEvent::Log(level, message) => match level {
                FfmpegLogLevel::Fatal | FfmpegLogLevel::Error => {
                    log::warn!(target: "ffmpeg_log", "{message}");
                    self.remember(message);
                }
                _ => log::debug!(target: "ffmpeg_log", "{message}"),
            },
            FfmpegEvent::Error(error) => {
                log::warn!(target: "ffmpeg_log", "ffmpeg stderr error: {error}");
                self.remember(error);
            }
            _ => {}
        }
        Ok(())
    }

    /// Error lines seen so far, oldest first.
    #[must_use]
    pub fn stderr_tail(&self) -> String {
        self.stderr_tail.join("\n")
    }

    fn remember(&mut self, line: String) {
        if self.stderr_tail.len() == STDERR_TAIL_LINES {
            self.stderr_tail.remove(0);
        }
        self.stderr_tail.push(line);
    }
}
