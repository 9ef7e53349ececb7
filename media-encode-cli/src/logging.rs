// ============================================================================
// media-encode-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Helper Functions for Logging
//
// The logger itself is installed by media_encode_core::logging::setup_logging;
// this module only decides where the optional log file goes.

use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("media_encode_run_{}.log", media_encode::logging::get_timestamp());
/// // Result: "media_encode_run_20240601_123045.log"
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of the run log inside `log_dir`.
pub fn run_log_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("media_encode_run_{}.log", get_timestamp()))
}
