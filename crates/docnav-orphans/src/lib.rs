//! Orphan document detection for docnav.
//!
//! Treats the document set as a directed graph: nodes are document files,
//! edges are markdown links between them. Documents referenced by a sidebar
//! seed the reachable set; a fixpoint expansion follows links until nothing
//! new turns up. Whatever remains unreached is an orphan.
//!
//! Orphans are advisory: they surface as warnings through
//! [`report_orphans`] and never fail a build.

mod detect;
mod scan;

pub use detect::{find_orphans, report_orphans};
pub use scan::{extract_doc_id, extract_links};
