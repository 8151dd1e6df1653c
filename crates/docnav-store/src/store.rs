//! Store trait and error type.

use std::path::PathBuf;

/// Store error.
///
/// Disk failures are propagated, never retried: the consumers of this trait
/// are one-shot batch computations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document with the requested filename.
    #[error("document not found: {0}")]
    NotFound(String),
    /// Underlying I/O failure (missing directory, permissions).
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Read-only access to a flat set of document files.
///
/// Filenames are plain names (`intro.md`), never paths; the store owns the
/// mapping to its backing location.
pub trait DocStore {
    /// List all document filenames, non-recursive, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing location cannot be enumerated.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Read the full text content of a document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown filenames, or
    /// [`StoreError::Io`] if the read fails.
    fn read(&self, name: &str) -> Result<String, StoreError>;

    /// Whether a document with this filename exists.
    ///
    /// Returns `false` on errors.
    fn exists(&self, name: &str) -> bool;
}
