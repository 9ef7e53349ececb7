//! Core library for batch re-encoding Matroska trees with ffmpeg.
//!
//! The library walks a source tree for `.mkv` files, maps each one onto the
//! same relative path under a target tree, skips files that already exist
//! there, and re-encodes the rest to AV1/Opus through a staged temp file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use media_encode_core::{CoreConfig, process_videos};
//! use media_encode_core::external::SidecarSpawner;
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/source"),
//!     PathBuf::from("/path/to/target"),
//! );
//!
//! let summary = process_videos(&SidecarSpawner, &config).unwrap();
//! println!("{} converted, {} skipped", summary.converted.len(), summary.skipped.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod logging;
pub mod processing;
pub mod temp_files;
pub mod terminal_output;
pub mod utils;

// Re-exports for public API
pub use config::{BatchRoots, CoreConfig};
pub use discovery::{ConversionJob, SourceFile, find_processable_files};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use processing::{convert_file, process_videos};
pub use utils::{calculate_size_reduction, format_bytes, format_duration};

use std::path::PathBuf;
use std::time::Duration;

/// Statistics for one successfully converted file.
#[derive(Debug, Clone)]
pub struct EncodeResult {
    /// Path relative to both roots.
    pub relative_path: PathBuf,
    pub duration: Duration,
    pub input_size: u64,
    pub output_size: u64,
}

/// Outcome of a complete batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub converted: Vec<EncodeResult>,
    /// Relative paths whose target already existed.
    pub skipped: Vec<PathBuf>,
}
