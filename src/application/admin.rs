//! Catalog Admin Use Case
//!
//! Creates menus and items. Allocates ids, derives canonical item urls and
//! enforces the invariants the tree builder relies on: unique menu titles,
//! unique item slugs, and parents from the same menu.

use crate::domain::entities::{Menu, MenuItem};
use crate::domain::ports::{MenuRepository, RepositoryError};
use crate::domain::services::LinkBuilder;
use crate::domain::value_objects::ItemId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("invalid slug '{slug}': use letters, digits, '-' or '_'")]
    InvalidSlug { slug: String },

    #[error("menu '{title}' already exists")]
    DuplicateMenu { title: String },

    #[error("menu '{title}' does not exist")]
    UnknownMenu { title: String },

    #[error("slug '{slug}' is already used by item {id}")]
    DuplicateSlug { slug: String, id: ItemId },

    #[error("parent item {parent} does not exist")]
    UnknownParent { parent: ItemId },

    #[error("parent item {parent} belongs to menu '{parent_menu}', not '{menu}'")]
    ParentInOtherMenu {
        parent: ItemId,
        menu: String,
        parent_menu: String,
    },

    #[error("no {kind} ids left: the largest stored id is already the maximum")]
    IdsExhausted { kind: &'static str },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for a new item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub menu: String,
    pub title: String,
    pub slug: String,
    pub parent: Option<ItemId>,
}

pub struct CatalogAdminUseCase<R: MenuRepository> {
    repository: R,
    links: LinkBuilder,
}

impl<R: MenuRepository> CatalogAdminUseCase<R> {
    pub fn new(repository: R, links: LinkBuilder) -> Self {
        Self { repository, links }
    }

    pub fn add_menu(&self, title: &str, slug: &str) -> Result<Menu, AdminError> {
        let title = require("title", title)?;
        let slug = validate_slug(slug)?;

        let menu = self.repository.update(|catalog| {
            if catalog.menu(title).is_some() {
                return Err(AdminError::DuplicateMenu {
                    title: title.to_string(),
                });
            }

            let id = catalog
                .next_menu_id()
                .ok_or(AdminError::IdsExhausted { kind: "menu" })?;
            let menu = Menu::new(id, title, slug);
            catalog.menus.push(menu.clone());
            Ok(menu)
        })?;

        tracing::info!(menu = %menu.title, id = menu.id, "created menu");
        Ok(menu)
    }

    pub fn add_item(&self, new: NewItem) -> Result<MenuItem, AdminError> {
        let menu = require("menu", &new.menu)?;
        let title = require("title", &new.title)?;
        let slug = validate_slug(&new.slug)?;

        let item = self.repository.update(|catalog| {
            if catalog.menu(menu).is_none() {
                return Err(AdminError::UnknownMenu {
                    title: menu.to_string(),
                });
            }
            if let Some(existing) = catalog.item_by_slug(slug) {
                return Err(AdminError::DuplicateSlug {
                    slug: slug.to_string(),
                    id: existing.id(),
                });
            }
            if let Some(parent) = new.parent {
                let parent_item = catalog
                    .item(parent)
                    .ok_or(AdminError::UnknownParent { parent })?;
                if parent_item.menu() != menu {
                    return Err(AdminError::ParentInOtherMenu {
                        parent,
                        menu: menu.to_string(),
                        parent_menu: parent_item.menu().to_string(),
                    });
                }
            }

            let id = catalog
                .next_item_id()
                .ok_or(AdminError::IdsExhausted { kind: "item" })?;
            let item = MenuItem::new(id.get(), menu, title, slug)
                .with_parent_id(new.parent)
                .with_url(self.links.item_url(menu, id));
            catalog.items.push(item.clone());
            Ok(item)
        })?;

        tracing::info!(menu, id = %item.id(), slug, "created menu item");
        Ok(item)
    }
}

/// Slug derived from a title: lowercase, runs of other characters become `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AdminError> {
    let value = value.trim();
    if value.is_empty() {
        Err(AdminError::EmptyField { field })
    } else {
        Ok(value)
    }
}

fn validate_slug(slug: &str) -> Result<&str, AdminError> {
    let slug = require("slug", slug)?;
    if slug
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        Ok(slug)
    } else {
        Err(AdminError::InvalidSlug {
            slug: slug.to_string(),
        })
    }
}
