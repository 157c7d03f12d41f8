//! Catalog integrity checks
//!
//! The tree builder trusts storage to keep menus well formed. These checks
//! verify that trust for a whole catalog and report every problem found.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::entities::MenuCatalog;
use crate::domain::value_objects::ItemId;

/// A single integrity problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    DuplicateMenuTitle { title: String },
    DuplicateItemId { id: ItemId },
    DuplicateSlug { slug: String },
    UnknownMenu { id: ItemId, menu: String },
    MissingParent { id: ItemId, parent: ItemId },
    CrossMenuParent {
        id: ItemId,
        parent: ItemId,
        menu: String,
        parent_menu: String,
    },
    /// Items forming a parent loop, smallest id first
    Cycle { ids: Vec<ItemId> },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMenuTitle { title } => write!(f, "menu title '{title}' is used twice"),
            Self::DuplicateItemId { id } => write!(f, "item id {id} is used twice"),
            Self::DuplicateSlug { slug } => write!(f, "item slug '{slug}' is used twice"),
            Self::UnknownMenu { id, menu } => {
                write!(f, "item {id} belongs to unknown menu '{menu}'")
            }
            Self::MissingParent { id, parent } => {
                write!(f, "item {id} references missing parent {parent}")
            }
            Self::CrossMenuParent {
                id,
                parent,
                menu,
                parent_menu,
            } => write!(
                f,
                "item {id} in menu '{menu}' has parent {parent} from menu '{parent_menu}'"
            ),
            Self::Cycle { ids } => {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "parent loop between items {}", ids.join(" → "))
            }
        }
    }
}

/// Run every check over `catalog`. An empty result means the catalog is sound.
pub fn check_catalog(catalog: &MenuCatalog) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    let mut titles = HashSet::new();
    for menu in &catalog.menus {
        if !titles.insert(menu.title.as_str()) {
            issues.push(IntegrityIssue::DuplicateMenuTitle {
                title: menu.title.clone(),
            });
        }
    }

    let mut by_id = HashMap::new();
    let mut slugs = HashSet::new();
    for item in &catalog.items {
        if by_id.insert(item.id(), item).is_some() {
            issues.push(IntegrityIssue::DuplicateItemId { id: item.id() });
        }
        if !slugs.insert(item.slug()) {
            issues.push(IntegrityIssue::DuplicateSlug {
                slug: item.slug().to_string(),
            });
        }
        if !titles.contains(item.menu()) {
            issues.push(IntegrityIssue::UnknownMenu {
                id: item.id(),
                menu: item.menu().to_string(),
            });
        }
    }

    for item in &catalog.items {
        let Some(parent_id) = item.parent_id() else {
            continue;
        };
        match by_id.get(&parent_id) {
            None => issues.push(IntegrityIssue::MissingParent {
                id: item.id(),
                parent: parent_id,
            }),
            Some(parent) if parent.menu() != item.menu() => {
                issues.push(IntegrityIssue::CrossMenuParent {
                    id: item.id(),
                    parent: parent_id,
                    menu: item.menu().to_string(),
                    parent_menu: parent.menu().to_string(),
                })
            }
            Some(_) => {}
        }
    }

    let parents: HashMap<ItemId, Option<ItemId>> = by_id
        .iter()
        .map(|(id, item)| (*id, item.parent_id()))
        .collect();
    let order: Vec<ItemId> = catalog.items.iter().map(|i| i.id()).collect();
    issues.extend(find_cycles(&order, &parents));

    issues
}

fn find_cycles(
    order: &[ItemId],
    parents: &HashMap<ItemId, Option<ItemId>>,
) -> Vec<IntegrityIssue> {
    let mut done: HashSet<ItemId> = HashSet::new();
    let mut cycles = Vec::new();

    for &start in order {
        if done.contains(&start) {
            continue;
        }

        let mut trail: Vec<ItemId> = Vec::new();
        let mut on_trail: HashSet<ItemId> = HashSet::new();
        let mut current = Some(start);

        while let Some(id) = current {
            if done.contains(&id) || !parents.contains_key(&id) {
                break;
            }
            if !on_trail.insert(id) {
                let loop_start = trail.iter().position(|t| *t == id).unwrap_or(0);
                let mut ids = trail[loop_start..].to_vec();
                let min_pos = ids
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, id)| **id)
                    .map_or(0, |(pos, _)| pos);
                ids.rotate_left(min_pos);
                cycles.push(IntegrityIssue::Cycle { ids });
                break;
            }
            trail.push(id);
            current = parents.get(&id).copied().flatten();
        }

        done.extend(trail);
    }

    cycles
}
