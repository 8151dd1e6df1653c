//! Document content scanning.
//!
//! Two plaintext conventions feed the orphan graph: the `id:` front-matter
//! line that names a document, and inline markdown links between document
//! files.

use std::sync::LazyLock;

use regex::Regex;

/// First `id: <value>` line in a document.
static DOC_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^id:[ \t]*(\S+)[ \t]*$").unwrap());

/// Inline markdown links whose target is a document file.
static DOC_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\(([^()\s]+\.md)\)").unwrap());

/// Extract a document's declared identifier.
///
/// Only the first `id: <value>` line counts; a document without one cannot
/// seed reachability.
#[must_use]
pub fn extract_doc_id(content: &str) -> Option<&str> {
    DOC_ID_RE
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Extract the targets of all document links, in document order.
#[must_use]
pub fn extract_links(content: &str) -> Vec<&str> {
    DOC_LINK_RE
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_doc_id_from_front_matter() {
        let content = "---\nid: getting-started\ntitle: Getting Started\n---\n\nBody.";
        assert_eq!(extract_doc_id(content), Some("getting-started"));
    }

    #[test]
    fn test_extract_doc_id_first_line_wins() {
        let content = "id: first\nid: second\n";
        assert_eq!(extract_doc_id(content), Some("first"));
    }

    #[test]
    fn test_extract_doc_id_requires_line_start() {
        assert_eq!(extract_doc_id("some id: nope\n"), None);
        assert_eq!(extract_doc_id("No identifier here."), None);
    }

    #[test]
    fn test_extract_doc_id_without_space() {
        assert_eq!(extract_doc_id("id:compact\n"), Some("compact"));
    }

    #[test]
    fn test_extract_links_in_order() {
        let content = "See [setup](setup.md) then [deploy](./deploy.md).";
        assert_eq!(extract_links(content), vec!["setup.md", "./deploy.md"]);
    }

    #[test]
    fn test_extract_links_ignores_non_document_targets() {
        let content = "[site](https://example.com/page) and ![img](logo.png)";
        assert!(extract_links(content).is_empty());
    }

    #[test]
    fn test_extract_links_empty_text_allowed() {
        assert_eq!(extract_links("[](other.md)"), vec!["other.md"]);
    }
}
