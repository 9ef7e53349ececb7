// media-encode-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use media_encode_core::config::DEFAULT_FFMPEG_PATH;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "media-encode: batch re-encode .mkv files to AV1/Opus",
    long_about = "Walks SOURCE_DIR recursively and re-encodes every .mkv file with ffmpeg \
                  into the same relative path under TARGET_DIR. Files that already exist in \
                  TARGET_DIR are skipped; the first failed conversion stops the run."
)]
pub struct Cli {
    /// Directory scanned recursively for .mkv files
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Directory receiving the mirrored, re-encoded tree
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// ffmpeg binary to run
    #[arg(long, value_name = "PATH", env = "MEDIA_ENCODE_FFMPEG", default_value = DEFAULT_FFMPEG_PATH)]
    pub ffmpeg: PathBuf,

    /// Optional: Directory for staging files (defaults to the system temp dir)
    #[arg(long, value_name = "DIR", env = "MEDIA_ENCODE_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Optional: Also write a timestamped log file into this directory
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable debug-level logging (encoder command lines and output)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Parses the process arguments; exits with a usage message on bad input.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
