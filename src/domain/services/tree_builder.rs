//! Menu tree building service
//!
//! Turns the flat item list of one menu into the partial tree shown on a
//! page: every top-level item, plus the children of each item on the path
//! from the selected item up to its root. Branches off that path are left
//! collapsed and never computed.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::entities::MenuItem;
use crate::domain::value_objects::ItemId;

/// A rendered menu entry
///
/// `children` is `Some` only for nodes on the expansion path. A node on the
/// path with no stored children carries `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemNode {
    pub id: ItemId,
    pub parent_id: Option<ItemId>,
    pub title: String,
    pub slug: String,
    pub url: String,
    pub menu: String,
    /// True only for the selected item itself
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItemNode>>,
}

impl MenuItemNode {
    fn collapsed(item: &MenuItem, selected: bool) -> Self {
        Self {
            id: item.id(),
            parent_id: item.parent_id(),
            title: item.title().to_string(),
            slug: item.slug().to_string(),
            url: item.url().to_string(),
            menu: item.menu().to_string(),
            selected,
            children: None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Children, or an empty slice for collapsed nodes
    pub fn children(&self) -> &[MenuItemNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Result of a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuTree {
    /// Top-level items in input order
    pub roots: Vec<MenuItemNode>,
    /// Expansion path, root first and selected item last; empty without a selection
    pub path: Vec<ItemId>,
}

/// Why a selection could not be expanded
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TreeBuildError {
    #[error("selected item {id} is not part of this menu")]
    SelectedNotFound { id: ItemId },

    #[error("corrupt menu data: parent chain of item {id} loops back on itself")]
    Cycle { id: ItemId },

    #[error("corrupt menu data: item {id} references parent {parent} outside this menu")]
    MissingParent { id: ItemId, parent: ItemId },

    #[error("corrupt menu data: item id {id} is used more than once")]
    DuplicateId { id: ItemId },
}

/// Builds display trees from the flat items of one menu
///
/// Borrows the items; every build produces fresh nodes and leaves the input
/// untouched, so a cached fetch can be shared between renders.
pub struct MenuTreeBuilder<'a> {
    items: &'a [MenuItem],
    by_id: HashMap<ItemId, &'a MenuItem>,
    children: HashMap<ItemId, Vec<&'a MenuItem>>,
    /// First id seen twice, if any
    duplicate: Option<ItemId>,
}

impl<'a> MenuTreeBuilder<'a> {
    /// Index the items of one menu. Lookups never leave this slice.
    pub fn new(items: &'a [MenuItem]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut children: HashMap<ItemId, Vec<&'a MenuItem>> = HashMap::new();
        let mut duplicate = None;

        for item in items {
            if by_id.insert(item.id(), item).is_some() && duplicate.is_none() {
                duplicate = Some(item.id());
            }
            if let Some(parent) = item.parent_id() {
                children.entry(parent).or_default().push(item);
            }
        }

        Self {
            items,
            by_id,
            children,
            duplicate,
        }
    }

    /// Top-level items in input order
    pub fn roots(&self) -> impl Iterator<Item = &'a MenuItem> + '_ {
        self.items.iter().filter(|item| item.is_top_level())
    }

    /// Build the tree for an optional selection.
    ///
    /// Without a selection every root comes back collapsed. With one, the
    /// selected item, its ancestors and its own direct children are expanded.
    pub fn build(&self, selected: Option<ItemId>) -> Result<MenuTree, TreeBuildError> {
        let Some(selected) = selected else {
            return Ok(MenuTree {
                roots: self
                    .roots()
                    .map(|item| MenuItemNode::collapsed(item, false))
                    .collect(),
                path: Vec::new(),
            });
        };

        // Expansion follows ids, so repeated ids could send it in circles
        if let Some(id) = self.duplicate {
            return Err(TreeBuildError::DuplicateId { id });
        }

        let mut path = self.ancestor_path(selected)?;
        let expansion: HashSet<ItemId> = path.iter().copied().collect();

        let roots = self
            .roots()
            .map(|item| self.materialize(item, &expansion, selected))
            .collect();

        path.reverse();
        Ok(MenuTree { roots, path })
    }

    /// Ids from the selected item up to its root, selected first.
    ///
    /// A top-level selection yields just that root.
    pub fn ancestor_path(&self, selected: ItemId) -> Result<Vec<ItemId>, TreeBuildError> {
        let mut current = *self
            .by_id
            .get(&selected)
            .ok_or(TreeBuildError::SelectedNotFound { id: selected })?;

        let mut path = Vec::new();
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current.id()) {
                return Err(TreeBuildError::Cycle { id: current.id() });
            }
            path.push(current.id());

            let Some(parent) = current.parent_id() else {
                break;
            };
            current = *self
                .by_id
                .get(&parent)
                .ok_or(TreeBuildError::MissingParent {
                    id: current.id(),
                    parent,
                })?;
        }

        Ok(path)
    }

    fn children_of(&self, id: ItemId) -> impl Iterator<Item = &'a MenuItem> + '_ {
        self.children.get(&id).into_iter().flatten().copied()
    }

    // Recursion only descends into nodes of the expansion set, which
    // `ancestor_path` has already proven to be a finite chain.
    fn materialize(
        &self,
        item: &MenuItem,
        expansion: &HashSet<ItemId>,
        selected: ItemId,
    ) -> MenuItemNode {
        let mut node = MenuItemNode::collapsed(item, item.id() == selected);
        if expansion.contains(&item.id()) {
            node.children = Some(
                self.children_of(item.id())
                    .map(|child| self.materialize(child, expansion, selected))
                    .collect(),
            );
        }
        node
    }
}
