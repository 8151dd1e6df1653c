//! Sequential navigation index over docnav sidebars.
//!
//! Flattens every normalized sidebar into an ordered list of document ids
//! and answers the structural queries page rendering needs: which sidebar
//! owns a document, and what its previous/next neighbors are. Built once per
//! sidebar load; derived values only, never mutated in place.
//!
//! Document ids are assumed unique across the corpus. If an id appears in
//! several sidebars, the first sidebar in authoring order owns it.
//!
//! # Example
//!
//! ```
//! use docnav_index::NavigationIndex;
//! use docnav_sidebar::normalize;
//! use serde_json::json;
//!
//! let sidebars = normalize(&json!({ "docs": ["a", "b", "c"] })).unwrap();
//! let index = NavigationIndex::build(&sidebars);
//!
//! let nav = index.navigation_for("b").unwrap();
//! assert_eq!(nav.previous.as_deref(), Some("a"));
//! assert_eq!(nav.next.as_deref(), Some("c"));
//! ```

use std::collections::HashSet;

use docnav_sidebar::{SidebarCollection, collect_doc_ids};

/// Navigation index error.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Sidebars reference document ids with no corresponding document.
    ///
    /// Reported as one aggregate failure so every dangling reference shows
    /// up at once, alongside the full set of known ids.
    #[error("sidebars reference unknown document ids {missing:?}; known ids: {valid:?}")]
    UnknownDocIds {
        /// Referenced ids with no matching document, sorted.
        missing: Vec<String>,
        /// All known-valid ids, sorted.
        valid: Vec<String>,
    },
}

/// Previous/next neighbors of a document within its owning sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocNavigation {
    /// Name of the owning sidebar.
    pub sidebar: String,
    /// Preceding document id, `None` at the start of the sidebar.
    pub previous: Option<String>,
    /// Following document id, `None` at the end of the sidebar.
    pub next: Option<String>,
}

/// Flattened document-id lists, one per sidebar, in authoring order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationIndex {
    doc_ids_by_sidebar: Vec<(String, Vec<String>)>,
}

impl NavigationIndex {
    /// Build the index from a normalized sidebar collection.
    ///
    /// Each sidebar is flattened in pre-order: ancestors before descendants,
    /// siblings in authoring order.
    #[must_use]
    pub fn build(sidebars: &SidebarCollection) -> Self {
        let doc_ids_by_sidebar: Vec<(String, Vec<String>)> = sidebars
            .iter()
            .map(|(name, sidebar)| {
                let ids = collect_doc_ids(sidebar)
                    .into_iter()
                    .map(str::to_owned)
                    .collect();
                (name.to_owned(), ids)
            })
            .collect();

        tracing::debug!(
            sidebar_count = doc_ids_by_sidebar.len(),
            doc_count = doc_ids_by_sidebar
                .iter()
                .map(|(_, ids)| ids.len())
                .sum::<usize>(),
            "Navigation index built"
        );

        Self { doc_ids_by_sidebar }
    }

    /// Flattened document ids for one sidebar.
    #[must_use]
    pub fn doc_ids(&self, sidebar: &str) -> Option<&[String]> {
        self.doc_ids_by_sidebar
            .iter()
            .find(|(name, _)| name == sidebar)
            .map(|(_, ids)| ids.as_slice())
    }

    /// First document id of the first sidebar that references any document.
    ///
    /// `None` when no sidebar references a document at all.
    #[must_use]
    pub fn first_doc_of_first_sidebar(&self) -> Option<&str> {
        self.doc_ids_by_sidebar
            .iter()
            .find_map(|(_, ids)| ids.first())
            .map(String::as_str)
    }

    /// Name of the sidebar owning a document id.
    ///
    /// When the id appears in several sidebars, the first by authoring order
    /// wins. `None` when no sidebar references the id.
    #[must_use]
    pub fn sidebar_owning(&self, doc_id: &str) -> Option<&str> {
        self.doc_ids_by_sidebar
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == doc_id))
            .map(|(name, _)| name.as_str())
    }

    /// Previous/next neighbors of a document within its owning sidebar.
    ///
    /// Returns `None` when no sidebar owns the id.
    #[must_use]
    pub fn navigation_for(&self, doc_id: &str) -> Option<DocNavigation> {
        for (name, ids) in &self.doc_ids_by_sidebar {
            if let Some(position) = ids.iter().position(|id| id == doc_id) {
                return Some(DocNavigation {
                    sidebar: name.clone(),
                    previous: position.checked_sub(1).map(|p| ids[p].clone()),
                    next: ids.get(position + 1).cloned(),
                });
            }
        }
        None
    }

    /// Check that every referenced document id names a real document.
    ///
    /// One batched check: all violations are collected and reported
    /// together, not one error per id.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownDocIds`] listing every referenced id
    /// absent from `valid_ids`, alongside the full valid set.
    pub fn check_referenced_ids_exist(
        &self,
        valid_ids: &HashSet<String>,
    ) -> Result<(), IndexError> {
        let mut missing: Vec<String> = self
            .doc_ids_by_sidebar
            .iter()
            .flat_map(|(_, ids)| ids)
            .filter(|id| !valid_ids.contains(*id))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        missing.dedup();

        let mut valid: Vec<String> = valid_ids.iter().cloned().collect();
        valid.sort();

        Err(IndexError::UnknownDocIds { missing, valid })
    }
}
