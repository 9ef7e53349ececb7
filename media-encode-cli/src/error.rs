// ============================================================================
// media-encode-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit status mapping
//
// The CLI has no error type of its own; everything it can fail with is a
// media-encode-core error, reported once and turned into exit status 1.

use media_encode_core::{CoreError, CoreResult, ErrorKind};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for any failed run. Usage errors exit through clap instead.
pub const EXIT_FAILURE: i32 = 1;

/// A hint shown under the error message, where one is useful.
#[must_use]
pub fn suggestion_for(error: &CoreError) -> Option<&'static str> {
    match error.kind() {
        ErrorKind::Configuration => {
            Some("Check that SOURCE_DIR exists and that TARGET_DIR is a different directory")
        }
        ErrorKind::Conversion => {
            Some("Files converted before the failure are kept; rerun to resume from this file")
        }
        ErrorKind::Io => None,
    }
}
