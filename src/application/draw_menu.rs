//! Draw Menu Use Case
//!
//! One page render of one menu: fetch the menu's items, read this menu's
//! selection from the request query, build the partial tree and compute the
//! query string other menus need carried through links.

use std::num::ParseIntError;

use serde::Serialize;

use crate::domain::ports::{MenuRepository, RepositoryError};
use crate::domain::services::{
    passthrough_query, with_passthrough, MenuItemNode, MenuTreeBuilder, TreeBuildError,
};
use crate::domain::value_objects::{ItemId, QueryParams};

/// Everything a renderer needs for one menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuContext {
    /// Menu title, also the query parameter carrying its selection
    pub menu: String,
    pub roots: Vec<MenuItemNode>,
    /// Query parameters of every other menu, `&`-joined
    pub other_querystring: String,
    /// Expansion path, root first; empty when nothing is selected
    pub path: Vec<ItemId>,
}

impl MenuContext {
    /// Link for `node` that keeps the other menus' selection
    pub fn href(&self, node: &MenuItemNode) -> String {
        with_passthrough(&node.url, &self.other_querystring)
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.path.last().copied()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DrawMenuError {
    #[error("invalid selection '{value}' for menu '{menu}': {source}")]
    InvalidSelection {
        menu: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot expand menu '{menu}': {source}")]
    Tree {
        menu: String,
        #[source]
        source: TreeBuildError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DrawMenuError {
    /// Selection problems a render may degrade from; storage failures are not
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelection { .. }
                | Self::Tree {
                    source: TreeBuildError::SelectedNotFound { .. },
                    ..
                }
        )
    }
}

pub struct DrawMenuUseCase<R: MenuRepository> {
    repository: R,
}

impl<R: MenuRepository> DrawMenuUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Render `menu_name`, surfacing every selection problem.
    pub fn execute(
        &self,
        menu_name: &str,
        query: &QueryParams,
    ) -> Result<MenuContext, DrawMenuError> {
        let items = self.repository.fetch_items(menu_name)?;
        let selected = parse_selection(menu_name, query)?;

        let tree = MenuTreeBuilder::new(&items)
            .build(selected)
            .map_err(|source| DrawMenuError::Tree {
                menu: menu_name.to_string(),
                source,
            })?;

        tracing::debug!(
            menu = menu_name,
            items = items.len(),
            selected = ?selected,
            "built menu tree"
        );

        Ok(MenuContext {
            menu: menu_name.to_string(),
            roots: tree.roots,
            other_querystring: passthrough_query(query, menu_name),
            path: tree.path,
        })
    }

    /// Render `menu_name`, falling back to the collapsed menu when the
    /// selection is unparsable or names no item of this menu.
    ///
    /// Storage errors and corrupt menu data are still returned.
    pub fn execute_or_degrade(
        &self,
        menu_name: &str,
        query: &QueryParams,
    ) -> Result<MenuContext, DrawMenuError> {
        match self.execute(menu_name, query) {
            Err(e) if e.is_selection_error() => {
                tracing::warn!("{}; rendering collapsed menu", e);
                let mut without_selection = query.clone();
                without_selection.remove(menu_name);
                let mut context = self.execute(menu_name, &without_selection)?;
                context.other_querystring = passthrough_query(query, menu_name);
                Ok(context)
            }
            other => other,
        }
    }
}

fn parse_selection(menu_name: &str, query: &QueryParams) -> Result<Option<ItemId>, DrawMenuError> {
    query
        .get(menu_name)
        .map(|raw| {
            raw.parse::<ItemId>()
                .map_err(|source| DrawMenuError::InvalidSelection {
                    menu: menu_name.to_string(),
                    value: raw.to_string(),
                    source,
                })
        })
        .transpose()
}
