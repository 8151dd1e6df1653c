//! Sidebar tree model and normalization for docnav.
//!
//! A sidebar is the user-authored navigation description for a documentation
//! site. Authors write it in a loose JSON shape (bare strings, shorthand
//! maps, explicitly tagged objects); this crate normalizes that input into a
//! canonical [`SidebarItem`] tree and provides the generic tree queries the
//! rest of the system is built on.
//!
//! # Example
//!
//! ```
//! use docnav_sidebar::{SidebarItem, normalize};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "docs": ["intro", { "Guides": ["setup", "deploy"] }],
//! });
//! let sidebars = normalize(&raw).unwrap();
//!
//! let docs = sidebars.get("docs").unwrap();
//! assert_eq!(docs[0], SidebarItem::doc("intro"));
//! ```

mod item;
mod normalize;
mod query;

pub use item::{ItemKind, Sidebar, SidebarCollection, SidebarItem};
pub use normalize::{ValidationError, normalize};
pub use query::{collect_by_kind, collect_doc_ids, transform};
