//! Batch orchestration and per-file conversion.

/// Tree walk driver with skip and fail-fast handling
pub mod batch;

/// Staged single-file re-encode
pub mod convert;

pub use batch::process_videos;
pub use convert::convert_file;
