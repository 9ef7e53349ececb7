// ============================================================================
// media-encode-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg Binary
//
// The encoder is a black box: this module builds its command line, spawns it
// through a trait seam, and drains its output. Only the exit status decides
// whether a conversion succeeded.

/// ffmpeg argument building and output handling
pub mod ffmpeg;

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

pub use ffmpeg::{FfmpegOutputHandler, build_encode_command};
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
