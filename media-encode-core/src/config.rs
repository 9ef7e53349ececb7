//! Configuration structures and constants for media-encode-core.
//!
//! The encoder settings are fixed: every file is re-encoded to 10-bit
//! SVT-AV1 video with 6-channel Opus audio and untouched subtitles. Only the
//! locations (roots, staging directory, encoder binary) are configurable.

use crate::error::{CoreError, CoreResult};
use crate::utils::resolve_path;
use std::path::{Path, PathBuf};

// ---- Encoder settings ----

/// Container extension of the files scanned and produced (case-sensitive).
pub const CONTAINER_EXTENSION: &str = "mkv";

/// ffmpeg video encoder.
pub const VIDEO_CODEC: &str = "libsvtav1";

/// Constant rate factor passed to SVT-AV1 (0-63, lower is higher quality).
pub const CRF: u8 = 30;

/// SVT-AV1 preset (0-13, lower is slower/better quality).
pub const SVT_AV1_PRESET: u8 = 6;

/// 10-bit 4:2:0 output.
pub const PIXEL_FORMAT: &str = "yuv420p10le";

/// Encoder-specific tuning string handed to `-svtav1-params`.
pub const SVT_AV1_PARAMS: &str = "tune=3:film-grain=10:enable-overlays=1";

/// ffmpeg audio encoder.
pub const AUDIO_CODEC: &str = "libopus";

pub const AUDIO_BITRATE: &str = "128k";

pub const AUDIO_CHANNELS: u8 = 6;

/// Subtitles are stream-copied, never re-encoded.
pub const SUBTITLE_CODEC: &str = "copy";

/// Map every stream of the first input.
pub const STREAM_MAP: &str = "0";

/// Default encoder binary, looked up on `PATH`.
pub const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

/// Prefix of the staging files created for each conversion.
pub const TEMP_FILE_PREFIX: &str = "media_encode";

// ---- Core configuration ----

/// Run configuration, usually built by the CLI from its arguments.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Root of the tree scanned for `.mkv` files.
    pub source_dir: PathBuf,

    /// Root of the mirrored output tree.
    pub target_dir: PathBuf,

    /// Where staging files are created; `None` means the system temp dir.
    pub temp_dir: Option<PathBuf>,

    /// Encoder binary.
    pub ffmpeg_path: PathBuf,
}

/// Source and target roots after resolution to absolute, canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRoots {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl CoreConfig {
    pub fn new(source_dir: PathBuf, target_dir: PathBuf) -> Self {
        Self {
            source_dir,
            target_dir,
            temp_dir: None,
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG_PATH),
        }
    }

    /// Directory in which staging files are created.
    pub fn staging_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Resolves both roots and checks them before any traversal.
    ///
    /// Fails with [`CoreError::SameDirectory`] when both roots resolve to the
    /// same path, and with [`CoreError::PathError`] when the source root is
    /// not an existing directory. Nothing is created on disk.
    pub fn resolve_roots(&self) -> CoreResult<BatchRoots> {
        let source = resolve_path(&self.source_dir)?;
        let target = resolve_path(&self.target_dir)?;

        if source == target {
            return Err(CoreError::SameDirectory(source));
        }

        ensure_directory(&source)?;

        Ok(BatchRoots { source, target })
    }
}

fn ensure_directory(path: &Path) -> CoreResult<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CoreError::PathError(format!(
            "Invalid source directory '{}': {}",
            path.display(),
            e
        ))
    })?;

    if metadata.is_dir() {
        Ok(())
    } else {
        Err(CoreError::PathError(format!(
            "Source '{}' is not a directory",
            path.display()
        )))
    }
}
