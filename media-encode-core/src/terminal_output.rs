//! Simple terminal output functions for media-encode.
//!
//! Everything goes through the `log` facade so the same lines reach the
//! console and, when enabled, the log file.

use console::style;
use log::{error, info};

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a section header (Level 1 - Main sections with cyan color)
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", style(title.to_uppercase()).cyan().bold());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a processing step (Level 2 - 2 spaces indentation and bold)
pub fn print_processing(message: &str) {
    if should_use_color() {
        info!("  » {}", style(message).bold());
    } else {
        info!("  » {}", message);
    }
}

/// Print a status line (Level 4 - Primary info with 6 spaces indentation)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let label_width = 15;
    let padding = if label.len() < label_width {
        label_width - label.len()
    } else {
        1
    };

    if should_use_color() && highlight {
        info!(
            "      {}:{} {}",
            label,
            " ".repeat(padding),
            style(value).bold()
        );
    } else {
        info!("      {}:{} {}", label, " ".repeat(padding), value);
    }
}

/// Print a success message (Level 2 - Success with 2 spaces indentation and green color)
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", style(message).green());
    } else {
        info!("  ✓ {}", message);
    }
}

/// Print a subsection header (Level 2 - Subsections with 2 spaces indentation and bold)
pub fn print_subsection(title: &str) {
    if should_use_color() {
        info!("  {}", style(title).bold());
    } else {
        info!("  {}", title);
    }
}

/// Print an error with an optional suggestion
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if should_use_color() {
        error!("  ✗ {}: {}", style(title).red().bold(), message);
    } else {
        error!("  ✗ {}: {}", title, message);
    }
    if let Some(hint) = suggestion {
        info!("    {}", hint);
    }
}
