//! Utility functions for path handling and formatting.

use crate::config::CONTAINER_EXTENSION;
use crate::error::{CoreError, CoreResult};
use std::path::{Component, Path, PathBuf};

/// Resolves `path` to an absolute path with symlinks resolved.
///
/// Unlike [`Path::canonicalize`], the path does not have to exist: the
/// longest existing prefix is canonicalized and the remaining components are
/// appended lexically (`.` dropped, `..` popping one level).
pub fn resolve_path(path: &Path) -> CoreResult<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| {
        CoreError::PathError(format!("Cannot resolve '{}': {}", path.display(), e))
    })?;
    let components: Vec<Component> = absolute.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if let Ok(mut resolved) = prefix.canonicalize() {
            for component in &components[split..] {
                match component {
                    Component::CurDir => {}
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    other => resolved.push(other.as_os_str()),
                }
            }
            return Ok(resolved);
        }
    }

    Ok(absolute)
}

/// True when the file name ends with the literal `.mkv` suffix (case-sensitive).
#[must_use]
pub fn has_container_extension(path: &Path) -> bool {
    let suffix = format!(".{CONTAINER_EXTENSION}");
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Percentage size reduction from input to output. 0 when nothing was saved.
#[must_use]
pub fn calculate_size_reduction(input_size: u64, output_size: u64) -> u64 {
    if input_size == 0 || output_size >= input_size {
        0
    } else {
        100 - ((output_size * 100) / input_size)
    }
}
