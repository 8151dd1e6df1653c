//! Filesystem-backed document store.

use std::path::{Path, PathBuf};

use crate::store::{DocStore, StoreError};

/// Document file extension.
const DOC_EXTENSION: &str = "md";

/// Document store over a flat directory of markdown files.
///
/// Listing is non-recursive. Hidden files and `_`-prefixed partials are
/// skipped. Filenames are returned sorted so callers see a stable order
/// across platforms.
#[derive(Clone, Debug)]
pub struct FsDocStore {
    dir: PathBuf,
}

impl FsDocStore {
    /// Create a store over the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a filename inside the backing directory.
    ///
    /// Rejects names with path separators so a store can never read outside
    /// its directory.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.contains(['/', '\\']) {
            return Err(StoreError::NotFound(name.to_owned()));
        }
        Ok(self.dir.join(name))
    }
}

/// Whether a directory entry filename is a document.
fn is_doc_name(name: &str) -> bool {
    !name.starts_with('.')
        && !name.starts_with('_')
        && Path::new(name)
            .extension()
            .is_some_and(|ext| ext == DOC_EXTENSION)
}

impl DocStore for FsDocStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_doc_name(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, StoreError> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_owned()));
        }
        std::fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_ok_and(|path| path.is_file())
    }
}
