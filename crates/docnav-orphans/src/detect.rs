//! Reachability analysis over the document link graph.

use std::collections::{HashMap, HashSet};

use docnav_index::NavigationIndex;
use docnav_store::{DocStore, StoreError};

use crate::scan::{extract_doc_id, extract_links};

/// Find documents unreachable from any sidebar.
///
/// Seeds the reachable set with files whose declared `id:` is owned by some
/// sidebar, then expands it to a fixpoint by following markdown links whose
/// target names another stored document. Orphans are whatever remains, in
/// listing order.
///
/// When no file is sidebar-owned at all there is no entry point to check
/// from, so the detector reports zero orphans rather than flagging the
/// whole corpus.
///
/// # Errors
///
/// Returns [`StoreError`] if listing the store or reading a document fails.
/// Orphans themselves are never an error.
pub fn find_orphans<S: DocStore>(
    store: &S,
    index: &NavigationIndex,
) -> Result<Vec<String>, StoreError> {
    let all_docs = store.list()?;

    // One read per file; the fixpoint rescans cached content only.
    let mut contents: HashMap<&str, String> = HashMap::with_capacity(all_docs.len());
    for name in &all_docs {
        contents.insert(name, store.read(name)?);
    }

    let mut reachable: HashSet<&str> = HashSet::new();
    let mut worklist: Vec<&str> = Vec::new();
    for name in &all_docs {
        let owned = extract_doc_id(&contents[name.as_str()])
            .is_some_and(|id| index.sidebar_owning(id).is_some());
        if owned {
            reachable.insert(name);
            worklist.push(name);
        }
    }

    if reachable.is_empty() {
        tracing::debug!(
            doc_count = all_docs.len(),
            "No sidebar-owned documents found, skipping orphan detection"
        );
        return Ok(Vec::new());
    }

    let filenames: HashSet<&str> = all_docs.iter().map(String::as_str).collect();

    // Fixpoint expansion. Files are marked reachable before being queued, so
    // link cycles terminate.
    while let Some(current) = worklist.pop() {
        for target in extract_links(&contents[current]) {
            let name = target.rsplit('/').next().unwrap_or(target);
            if let Some(&file) = filenames.get(name)
                && reachable.insert(file)
            {
                worklist.push(file);
            }
        }
    }

    let orphans: Vec<String> = all_docs
        .iter()
        .filter(|name| !reachable.contains(name.as_str()))
        .cloned()
        .collect();

    tracing::debug!(
        doc_count = all_docs.len(),
        reachable_count = reachable.len(),
        orphan_count = orphans.len(),
        "Orphan scan completed"
    );

    Ok(orphans)
}

/// Report orphans as build warnings, one per file.
///
/// Advisory only: orphans never abort a build.
pub fn report_orphans(orphans: &[String]) {
    for name in orphans {
        tracing::warn!(file = %name, "Document is not reachable from any sidebar");
    }
}

#[cfg(test)]
mod tests {
    use docnav_sidebar::normalize;
    use docnav_store::{FsDocStore, MockDocStore};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn index_over(ids: &[&str]) -> NavigationIndex {
        let sidebars = normalize(&json!({ "docs": ids })).unwrap();
        NavigationIndex::build(&sidebars)
    }

    #[test]
    fn test_link_chain_rescues_unlisted_doc() {
        // A is in the sidebar and links to B; C is neither referenced nor
        // linked. Only C is an orphan.
        let store = MockDocStore::new()
            .with_doc("a.md", "id: a\n\nSee [B](b.md).")
            .with_doc("b.md", "id: b\n\nNo links.")
            .with_doc("c.md", "id: c\n\nNo links.");
        let index = index_over(&["a"]);

        let orphans = find_orphans(&store, &index).unwrap();
        assert_eq!(orphans, vec!["c.md"]);
    }

    #[test]
    fn test_empty_seed_set_reports_no_orphans() {
        // Nothing is sidebar-owned, so there is no entry point to check
        // from; the link structure is irrelevant.
        let store = MockDocStore::new()
            .with_doc("a.md", "id: a\n\nSee [B](b.md).")
            .with_doc("b.md", "id: b\n");
        let index = index_over(&["unrelated"]);

        assert!(find_orphans(&store, &index).unwrap().is_empty());
    }

    #[test]
    fn test_link_cycle_terminates() {
        let store = MockDocStore::new()
            .with_doc("a.md", "id: a\n\n[B](b.md)")
            .with_doc("b.md", "id: b\n\n[A](a.md)")
            .with_doc("c.md", "id: c\n");
        let index = index_over(&["a"]);

        let orphans = find_orphans(&store, &index).unwrap();
        assert_eq!(orphans, vec!["c.md"]);
    }

    #[test]
    fn test_transitive_links_are_followed() {
        let store = MockDocStore::new()
            .with_doc("a.md", "id: a\n\n[B](b.md)")
            .with_doc("b.md", "id: b\n\n[C](c.md)")
            .with_doc("c.md", "id: c\n\n[D](d.md)")
            .with_doc("d.md", "id: d\n")
            .with_doc("e.md", "id: e\n");
        let index = index_over(&["a"]);

        let orphans = find_orphans(&store, &index).unwrap();
        assert_eq!(orphans, vec!["e.md"]);
    }

    #[test]
    fn test_links_to_unknown_files_are_ignored() {
        let store = MockDocStore::new().with_doc("a.md", "id: a\n\n[gone](gone.md)");
        let index = index_over(&["a"]);

        assert!(find_orphans(&store, &index).unwrap().is_empty());
    }

    #[test]
    fn test_relative_link_targets_match_by_filename() {
        let store = MockDocStore::new()
            .with_doc("a.md", "id: a\n\n[B](./b.md)")
            .with_doc("b.md", "id: b\n");
        let index = index_over(&["a"]);

        assert!(find_orphans(&store, &index).unwrap().is_empty());
    }

    #[test]
    fn test_doc_without_id_cannot_seed() {
        // b.md's id is in the sidebar, but the file declares none, so it
        // never seeds; a.md has an id the sidebar ignores.
        let store = MockDocStore::new()
            .with_doc("a.md", "id: a\n")
            .with_doc("b.md", "No front matter here.");
        let index = index_over(&["b"]);

        assert!(find_orphans(&store, &index).unwrap().is_empty());
    }

    #[test]
    fn test_orphans_reported_in_listing_order() {
        let store = MockDocStore::new()
            .with_doc("z.md", "id: z\n")
            .with_doc("seed.md", "id: seed\n")
            .with_doc("a.md", "id: a\n");
        let index = index_over(&["seed"]);

        let orphans = find_orphans(&store, &index).unwrap();
        assert_eq!(orphans, vec!["z.md", "a.md"]);
    }

    #[test]
    fn test_store_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocStore::new(dir.path().join("nonexistent"));
        let index = index_over(&["a"]);

        assert!(find_orphans(&store, &index).is_err());
    }

    #[test]
    fn test_against_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("intro.md"), "id: intro\n\n[next](guide.md)").unwrap();
        std::fs::write(dir.path().join("guide.md"), "id: guide\n").unwrap();
        std::fs::write(dir.path().join("stale.md"), "id: stale\n").unwrap();
        let store = FsDocStore::new(dir.path());
        let index = index_over(&["intro"]);

        let orphans = find_orphans(&store, &index).unwrap();
        assert_eq!(orphans, vec!["stale.md"]);
    }
}
