//! Error types for media-encode-core.
//!
//! Every fallible operation in the crate returns [`CoreResult`]. Errors are
//! grouped into a small closed set of [`ErrorKind`]s so callers can react to
//! configuration problems and conversion failures without string matching.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected before any work begins (bad or identical roots).
    Configuration,
    /// A single file failed to convert; the batch stops here.
    Conversion,
    /// Filesystem failure outside of a conversion.
    Io,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Source and target cannot be the same directory: {}", .0.display())]
    SameDirectory(PathBuf),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, io::Error),

    #[error("Failed to wait for {0}: {1}")]
    CommandWait(String, io::Error),

    #[error("{0} exited with {1}{suffix}", suffix = detail_suffix(.2))]
    CommandFailed(String, ExitStatus, String),

    #[error("Error occurred while converting {}: {cause}", .path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        cause: Box<CoreError>,
    },
}

impl CoreError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::SameDirectory(_) | CoreError::PathError(_) => ErrorKind::Configuration,
            CoreError::Conversion { .. }
            | CoreError::CommandStart(..)
            | CoreError::CommandWait(..)
            | CoreError::CommandFailed(..) => ErrorKind::Conversion,
            CoreError::Io(_) | CoreError::Walkdir(_) => ErrorKind::Io,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    detail: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, detail.into())
}
