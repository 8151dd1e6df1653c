//! Sidebar file loading for docnav.
//!
//! Reads a `sidebars.json` file, parses it, and normalizes it into a
//! [`SidebarCollection`]. Auto-discovery walks parent directories from a
//! starting point, so tools can run from anywhere inside a project.
//!
//! Loading is stateless: call [`load`] again after a file change to get a
//! fresh collection. Caching across reloads is the host's concern.

use std::path::{Path, PathBuf};

use docnav_sidebar::{SidebarCollection, ValidationError, normalize};

/// Sidebar filename to search for.
pub const SIDEBARS_FILENAME: &str = "sidebars.json";

/// Sidebar loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("sidebars file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Malformed sidebar shape.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Load and normalize a sidebars file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid
/// JSON, or fails normalization.
pub fn load(path: &Path) -> Result<SidebarCollection, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let sidebars = normalize(&raw)?;

    tracing::debug!(
        path = %path.display(),
        sidebar_count = sidebars.len(),
        "Sidebars loaded"
    );

    Ok(sidebars)
}

/// Search for a sidebars file in `start_dir` and its parents.
#[must_use]
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(SIDEBARS_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
