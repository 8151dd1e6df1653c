//! Mock document store for testing.

use crate::store::{DocStore, StoreError};

/// In-memory document store.
///
/// Documents list in insertion order. Use the builder method to configure
/// the mock with test data.
///
/// # Example
///
/// ```
/// use docnav_store::{DocStore, MockDocStore};
///
/// let store = MockDocStore::new().with_doc("intro.md", "id: intro\n");
///
/// assert_eq!(store.list().unwrap(), vec!["intro.md"]);
/// assert!(store.read("intro.md").unwrap().starts_with("id:"));
/// ```
#[derive(Debug, Default)]
pub struct MockDocStore {
    docs: Vec<(String, String)>,
}

impl MockDocStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given filename and content.
    #[must_use]
    pub fn with_doc(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.docs.push((name.into(), content.into()));
        self
    }
}

impl DocStore for MockDocStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.docs.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read(&self, name: &str) -> Result<String, StoreError> {
        self.docs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))
    }

    fn exists(&self, name: &str) -> bool {
        self.docs.iter().any(|(n, _)| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MockDocStore::new()
            .with_doc("z.md", "")
            .with_doc("a.md", "");

        assert_eq!(store.list().unwrap(), vec!["z.md", "a.md"]);
    }

    #[test]
    fn test_read_and_exists() {
        let store = MockDocStore::new().with_doc("a.md", "content");

        assert_eq!(store.read("a.md").unwrap(), "content");
        assert!(store.exists("a.md"));
        assert!(!store.exists("b.md"));
        assert!(matches!(
            store.read("b.md").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }
}
