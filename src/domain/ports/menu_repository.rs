//! MenuRepository port
//!
//! Storage of menus and items. Reads are what a render needs; the catalog
//! load/save pair backs the admin commands and the integrity check.

use std::path::PathBuf;

use crate::domain::entities::{MenuCatalog, MenuItem};

pub trait MenuRepository: Send + Sync {
    /// All items of the named menu in stable storage order.
    ///
    /// An unknown menu yields an empty list.
    fn fetch_items(&self, menu_title: &str) -> Result<Vec<MenuItem>, RepositoryError> {
        let catalog = self.load_catalog()?;
        Ok(catalog.items_of(menu_title).cloned().collect())
    }

    /// The item carrying `slug`, if any.
    fn fetch_item_by_slug(&self, slug: &str) -> Result<Option<MenuItem>, RepositoryError> {
        let catalog = self.load_catalog()?;
        Ok(catalog.item_by_slug(slug).cloned())
    }

    fn load_catalog(&self) -> Result<MenuCatalog, RepositoryError>;

    fn save_catalog(&self, catalog: &MenuCatalog) -> Result<(), RepositoryError>;

    /// Load, modify and save the catalog as one exclusive step.
    ///
    /// Nothing is written when `apply` fails.
    fn update<T, E, F>(&self, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut MenuCatalog) -> Result<T, E>,
        E: From<RepositoryError>,
        Self: Sized;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Failed to access menu store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize menu store: {message}")]
    SerializationError { message: String },

    #[error(
        "menu store corrupted: {path}\n  → Fix: correct the file by hand or restore it from backup\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
