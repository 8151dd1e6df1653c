//! Canonical sidebar tree model.
//!
//! Normalization always produces these explicitly tagged variants; no
//! shorthand form survives past [`normalize`](crate::normalize). Trees are
//! immutable after construction: derived structures (flattened indexes,
//! transformed trees) are new values.

use serde::Serialize;

/// A single normalized navigation entry.
///
/// Serializes in the explicitly tagged form also accepted by the normalizer,
/// so a normalized tree round-trips through its own output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Reference to a document by identifier.
    Doc {
        /// Document identifier.
        id: String,
    },
    /// External or static navigation entry, not tied to a document.
    Link {
        /// Link target.
        href: String,
        /// Display label.
        label: String,
    },
    /// Collapsible grouping owning an ordered sequence of children.
    Category {
        /// Display label.
        label: String,
        /// Whether the category renders collapsed initially.
        collapsed: bool,
        /// Child entries, in authoring order. Categories nest without limit.
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    /// Create a document reference.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc { id: id.into() }
    }

    /// Create a static link entry.
    #[must_use]
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Create a category with the default collapsed state.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self::Category {
            label: label.into(),
            collapsed: true,
            items,
        }
    }

    /// Discriminant of this item.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Doc { .. } => ItemKind::Doc,
            Self::Link { .. } => ItemKind::Link,
            Self::Category { .. } => ItemKind::Category,
        }
    }
}

/// Discriminant for [`SidebarItem`], used by the tree collectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Document reference.
    Doc,
    /// Static link.
    Link,
    /// Grouping node.
    Category,
}

/// A single navigation tree: an ordered sequence of top-level entries.
pub type Sidebar = Vec<SidebarItem>;

/// Named sidebars in authoring order.
///
/// Name lookup is linear; the collection is sized to a documentation site's
/// handful of sidebars, not a hot path. Iteration order is insertion order,
/// which downstream consumers rely on for ownership tie-breaking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarCollection {
    entries: Vec<(String, Sidebar)>,
}

impl SidebarCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named sidebar, replacing any existing sidebar with the same
    /// name in place.
    pub fn insert(&mut self, name: impl Into<String>, sidebar: Sidebar) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = sidebar,
            None => self.entries.push((name, sidebar)),
        }
    }

    /// Look up a sidebar by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Sidebar> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sidebar)| sidebar)
    }

    /// Iterate sidebars in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sidebar)> {
        self.entries
            .iter()
            .map(|(name, sidebar)| (name.as_str(), sidebar))
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
