//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator at the command layer.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal discovery failures — the run aborts before any checks execute.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Examples directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No examples found under {}", .0.display())]
    NoUnits(PathBuf),

    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-unit metadata failures. Captured as a failing check result and
/// short-circuit the remaining checks for that unit only.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid JSON in metadata: {0}")]
    Malformed(String),

    #[error("Error reading metadata: {0}")]
    Unreadable(String),
}
