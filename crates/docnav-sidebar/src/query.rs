//! Tree queries over normalized sidebars.
//!
//! Both operations are pure: collectors borrow from the input tree and the
//! transformer consumes its input and produces a new tree. Specialized
//! collectors (documents, links, categories) are projections of
//! [`collect_by_kind`].

use crate::item::{ItemKind, SidebarItem};

/// Collect all items of one kind, in pre-order.
///
/// Each item is visited before its descendants; siblings keep their original
/// order.
#[must_use]
pub fn collect_by_kind(items: &[SidebarItem], kind: ItemKind) -> Vec<&SidebarItem> {
    let mut found = Vec::new();
    collect_into(items, kind, &mut found);
    found
}

fn collect_into<'a>(items: &'a [SidebarItem], kind: ItemKind, found: &mut Vec<&'a SidebarItem>) {
    for item in items {
        if item.kind() == kind {
            found.push(item);
        }
        if let SidebarItem::Category { items: children, .. } = item {
            collect_into(children, kind, found);
        }
    }
}

/// Collect referenced document ids, in pre-order.
#[must_use]
pub fn collect_doc_ids(items: &[SidebarItem]) -> Vec<&str> {
    collect_by_kind(items, ItemKind::Doc)
        .into_iter()
        .filter_map(|item| match item {
            SidebarItem::Doc { id } => Some(id.as_str()),
            _ => None,
        })
        .collect()
}

/// Rewrite a tree bottom-up.
///
/// For every category, children are transformed first, then `update` is
/// applied to the rebuilt category; non-category items are passed to
/// `update` directly. `update` must be pure and total over all item kinds.
#[must_use]
pub fn transform<F>(items: Vec<SidebarItem>, update: &F) -> Vec<SidebarItem>
where
    F: Fn(SidebarItem) -> SidebarItem,
{
    items
        .into_iter()
        .map(|item| transform_item(item, update))
        .collect()
}

fn transform_item<F>(item: SidebarItem, update: &F) -> SidebarItem
where
    F: Fn(SidebarItem) -> SidebarItem,
{
    match item {
        SidebarItem::Category {
            label,
            collapsed,
            items,
        } => update(SidebarItem::Category {
            label,
            collapsed,
            items: transform(items, update),
        }),
        other => update(other),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// A tree exercising nesting and mixed kinds:
    ///
    /// ```text
    /// doc(a), Guides[ doc(b), Nested[ doc(c) ], link(x) ], doc(d)
    /// ```
    fn sample_tree() -> Vec<SidebarItem> {
        vec![
            SidebarItem::doc("a"),
            SidebarItem::category(
                "Guides",
                vec![
                    SidebarItem::doc("b"),
                    SidebarItem::category("Nested", vec![SidebarItem::doc("c")]),
                    SidebarItem::link("https://example.com", "X"),
                ],
            ),
            SidebarItem::doc("d"),
        ]
    }

    #[test]
    fn test_collect_docs_in_pre_order() {
        let tree = sample_tree();
        let ids = collect_doc_ids(&tree);
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_collect_categories_parents_before_descendants() {
        let tree = sample_tree();
        let labels: Vec<&str> = collect_by_kind(&tree, ItemKind::Category)
            .into_iter()
            .filter_map(|item| match item {
                SidebarItem::Category { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Guides", "Nested"]);
    }

    #[test]
    fn test_collect_links() {
        let tree = sample_tree();
        let links = collect_by_kind(&tree, ItemKind::Link);
        assert_eq!(
            links,
            vec![&SidebarItem::link("https://example.com", "X")]
        );
    }

    #[test]
    fn test_collect_on_empty_tree() {
        assert!(collect_by_kind(&[], ItemKind::Doc).is_empty());
        assert!(collect_doc_ids(&[]).is_empty());
    }

    #[test]
    fn test_transform_identity_returns_equal_tree() {
        let tree = sample_tree();
        let transformed = transform(tree.clone(), &|item| item);
        assert_eq!(transformed, tree);
    }

    #[test]
    fn test_transform_rewrites_every_item() {
        let uppercased = transform(sample_tree(), &|item| match item {
            SidebarItem::Doc { id } => SidebarItem::doc(id.to_uppercase()),
            other => other,
        });

        assert_eq!(collect_doc_ids(&uppercased), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_transform_is_bottom_up() {
        // Expanding every category proves children were rebuilt before the
        // parent was handed to `update`: the parent sees updated children.
        let expanded = transform(sample_tree(), &|item| match item {
            SidebarItem::Category {
                label,
                items,
                collapsed: _,
            } => {
                // A parent visited after its children sees them expanded.
                if label == "Guides" {
                    let SidebarItem::Category {
                        collapsed: nested_collapsed,
                        ..
                    } = &items[1]
                    else {
                        panic!("expected nested category");
                    };
                    assert!(!nested_collapsed);
                }
                SidebarItem::Category {
                    label,
                    collapsed: false,
                    items,
                }
            }
            other => other,
        });

        let all_expanded = collect_by_kind(&expanded, ItemKind::Category)
            .into_iter()
            .all(|item| matches!(item, SidebarItem::Category { collapsed: false, .. }));
        assert!(all_expanded);
    }
}
