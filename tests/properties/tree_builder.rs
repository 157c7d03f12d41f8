//! Property tests for menu tree building.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::sample::Index;

use treemenu::{ItemId, MenuItem, MenuItemNode, MenuTreeBuilder};

/// A random forest of items in shuffled order.
///
/// Item `i` may only point at an item created before it, so every parent
/// chain ends at a root.
fn forest() -> impl Strategy<Value = Vec<MenuItem>> {
    proptest::collection::vec((any::<bool>(), any::<usize>()), 1..=16)
        .prop_map(|links| {
            links
                .iter()
                .enumerate()
                .map(|(i, &(nested, pick))| {
                    let id = i as u64 + 1;
                    let item =
                        MenuItem::new(id, "main", format!("Item {id}"), format!("item-{id}"));
                    if nested && i > 0 {
                        item.with_parent((pick % i) as u64 + 1)
                    } else {
                        item
                    }
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Ids from `id` up to its root, root first
fn chain(items: &[MenuItem], id: ItemId) -> Vec<ItemId> {
    let parents: HashMap<ItemId, Option<ItemId>> =
        items.iter().map(|i| (i.id(), i.parent_id())).collect();
    let mut chain = vec![id];
    let mut current = id;
    while let Some(Some(parent)) = parents.get(&current) {
        chain.push(*parent);
        current = *parent;
    }
    chain.reverse();
    chain
}

fn children_in_input_order(items: &[MenuItem], parent: ItemId) -> Vec<ItemId> {
    items
        .iter()
        .filter(|i| i.parent_id() == Some(parent))
        .map(MenuItem::id)
        .collect()
}

fn expanded_ids(nodes: &[MenuItemNode], out: &mut Vec<ItemId>) {
    for node in nodes {
        if node.is_expanded() {
            out.push(node.id);
        }
        expanded_ids(node.children(), out);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without a selection, roots are the top-level items in input order, all collapsed.
    #[test]
    fn property_no_selection_returns_collapsed_roots(items in forest()) {
        let tree = MenuTreeBuilder::new(&items).build(None).unwrap();

        let expected: Vec<ItemId> = items
            .iter()
            .filter(|i| i.is_top_level())
            .map(MenuItem::id)
            .collect();
        let actual: Vec<ItemId> = tree.roots.iter().map(|n| n.id).collect();

        prop_assert_eq!(actual, expected);
        prop_assert!(tree.roots.iter().all(|n| n.children.is_none()));
        prop_assert!(tree.path.is_empty());
    }

    /// PROPERTY: the whole ancestor chain of the selection is reachable through nested children.
    #[test]
    fn property_ancestor_chain_is_expanded(items in forest(), pick in any::<Index>()) {
        let selected = pick.get(&items).id();
        let expected = chain(&items, selected);

        let tree = MenuTreeBuilder::new(&items).build(Some(selected)).unwrap();
        prop_assert_eq!(&tree.path, &expected);

        let mut level: &[MenuItemNode] = &tree.roots;
        for id in &expected {
            let node = level.iter().find(|n| n.id == *id);
            prop_assert!(node.is_some(), "item {} not reachable", id);
            let node = node.unwrap();
            prop_assert!(node.is_expanded());
            prop_assert_eq!(node.selected, *id == selected);

            let child_ids: Vec<ItemId> = node.children().iter().map(|n| n.id).collect();
            prop_assert_eq!(child_ids, children_in_input_order(&items, *id));
            level = node.children();
        }
    }

    /// PROPERTY: only nodes on the selected chain carry children.
    #[test]
    fn property_nothing_off_the_chain_is_expanded(items in forest(), pick in any::<Index>()) {
        let selected = pick.get(&items).id();
        let tree = MenuTreeBuilder::new(&items).build(Some(selected)).unwrap();

        let mut expanded = Vec::new();
        expanded_ids(&tree.roots, &mut expanded);
        expanded.sort();
        let mut expected = chain(&items, selected);
        expected.sort();

        prop_assert_eq!(expanded, expected);
    }

    /// PROPERTY: selecting a root expands exactly its direct children, collapsed.
    #[test]
    fn property_root_selection_expands_one_level(items in forest(), pick in any::<Index>()) {
        let roots: Vec<&MenuItem> = items.iter().filter(|i| i.is_top_level()).collect();
        let root = roots[pick.index(roots.len())].id();

        let tree = MenuTreeBuilder::new(&items).build(Some(root)).unwrap();
        let node = tree.roots.iter().find(|n| n.id == root).unwrap();

        let child_ids: Vec<ItemId> = node.children().iter().map(|n| n.id).collect();
        prop_assert_eq!(child_ids, children_in_input_order(&items, root));
        prop_assert!(node.children().iter().all(|c| c.children.is_none()));
        prop_assert_eq!(tree.path, vec![root]);
    }

    /// PROPERTY: building never changes the input items.
    #[test]
    fn property_build_leaves_input_untouched(items in forest(), pick in any::<Index>()) {
        let before = items.clone();
        let selected = pick.get(&items).id();

        let builder = MenuTreeBuilder::new(&items);
        builder.build(Some(selected)).unwrap();
        builder.build(None).unwrap();

        prop_assert_eq!(items, before);
    }

    /// PROPERTY: ids outside the menu are reported, never rendered.
    #[test]
    fn property_unknown_selection_is_an_error(items in forest(), offset in 1u64..1000) {
        let unknown = ItemId::new(items.len() as u64 + offset);
        prop_assert!(MenuTreeBuilder::new(&items).build(Some(unknown)).is_err());
    }
}
