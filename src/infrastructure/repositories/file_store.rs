//! File Menu Repository
//!
//! Persists menus and items in a single store file. The format follows the
//! file extension: `.toml` (default), `.yaml`/`.yml` or `.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Menu, MenuCatalog, MenuItem};
use crate::domain::ports::{MenuRepository, RepositoryError};
use crate::domain::services::LinkBuilder;
use crate::domain::value_objects::ItemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredMenu {
    id: u64,
    title: String,
    slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredItem {
    id: u64,
    title: String,
    slug: String,
    menu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    menus: Vec<StoredMenu>,
    #[serde(default)]
    items: Vec<StoredItem>,
}

/// On-disk encoding of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Toml,
    Yaml,
    Json,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

pub struct FileMenuRepository {
    path: PathBuf,
    format: StoreFormat,
    links: LinkBuilder,
}

impl FileMenuRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            format: StoreFormat::from_path(&path),
            path,
            links: LinkBuilder::default(),
        }
    }

    /// Use `links` to derive urls for stored items that carry none
    pub fn with_links(mut self, links: LinkBuilder) -> Self {
        self.links = links;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Take the exclusive store lock; released by `unlock` or on drop
    fn lock(&self) -> Result<fs::File, RepositoryError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RepositoryError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| RepositoryError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| RepositoryError::AccessError {
                message: e.to_string(),
            })?;
        Ok(lock_file)
    }

    fn corrupted(&self, message: impl ToString) -> RepositoryError {
        RepositoryError::Corrupted {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }

    fn decode(&self, content: &str) -> Result<StoreFile, RepositoryError> {
        match self.format {
            StoreFormat::Toml => toml::from_str(content).map_err(|e| self.corrupted(e)),
            StoreFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| self.corrupted(e)),
            StoreFormat::Json => serde_json::from_str(content).map_err(|e| self.corrupted(e)),
        }
    }

    fn encode(&self, store: &StoreFile) -> Result<String, RepositoryError> {
        let serialization = |message: String| RepositoryError::SerializationError { message };
        match self.format {
            StoreFormat::Toml => {
                toml::to_string_pretty(store).map_err(|e| serialization(e.to_string()))
            }
            StoreFormat::Yaml => {
                serde_yaml_ng::to_string(store).map_err(|e| serialization(e.to_string()))
            }
            StoreFormat::Json => serde_json::to_string_pretty(store)
                .map(|s| s + "\n")
                .map_err(|e| serialization(e.to_string())),
        }
    }

    fn load_from_disk(&self) -> Result<MenuCatalog, RepositoryError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "menu store missing, using empty catalog");
            return Ok(MenuCatalog::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| RepositoryError::AccessError {
            message: e.to_string(),
        })?;

        let store = self.decode(&content)?;
        let catalog = from_store(store, &self.links);
        tracing::debug!(
            path = %self.path.display(),
            menus = catalog.menus.len(),
            items = catalog.items.len(),
            "loaded menu store"
        );
        Ok(catalog)
    }

    fn save_to_disk(&self, catalog: &MenuCatalog) -> Result<(), RepositoryError> {
        let access = |e: std::io::Error| RepositoryError::AccessError {
            message: e.to_string(),
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(access)?;

        let content = self.encode(&to_store(catalog))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(access)?;
        tmp.write_all(content.as_bytes()).map_err(access)?;
        tmp.persist(&self.path).map_err(|e| access(e.error))?;

        tracing::info!(path = %self.path.display(), "saved menu store");
        Ok(())
    }
}

impl MenuRepository for FileMenuRepository {
    fn load_catalog(&self) -> Result<MenuCatalog, RepositoryError> {
        self.load_from_disk()
    }

    fn save_catalog(&self, catalog: &MenuCatalog) -> Result<(), RepositoryError> {
        let lock_file = self.lock()?;

        let result = self.save_to_disk(catalog);

        let _ = lock_file.unlock();
        result
    }

    fn update<T, E, F>(&self, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut MenuCatalog) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let lock_file = self.lock()?;

        let result = self.load_from_disk().map_err(E::from).and_then(|mut catalog| {
            let value = apply(&mut catalog)?;
            self.save_to_disk(&catalog)?;
            Ok(value)
        });

        let _ = lock_file.unlock();
        result
    }
}

fn from_store(store: StoreFile, links: &LinkBuilder) -> MenuCatalog {
    let menus = store
        .menus
        .into_iter()
        .map(|m| Menu::new(m.id, m.title, m.slug))
        .collect();

    let items = store
        .items
        .into_iter()
        .map(|i| {
            let url = match i.url {
                Some(url) if !url.is_empty() => url,
                _ => links.item_url(&i.menu, ItemId::new(i.id)),
            };
            MenuItem::new(i.id, i.menu, i.title, i.slug)
                .with_parent_id(i.parent.map(ItemId::new))
                .with_url(url)
        })
        .collect();

    MenuCatalog { menus, items }
}

fn to_store(catalog: &MenuCatalog) -> StoreFile {
    StoreFile {
        menus: catalog
            .menus
            .iter()
            .map(|m| StoredMenu {
                id: m.id,
                title: m.title.clone(),
                slug: m.slug.clone(),
            })
            .collect(),
        items: catalog
            .items
            .iter()
            .map(|i| StoredItem {
                id: i.id().get(),
                title: i.title().to_string(),
                slug: i.slug().to_string(),
                menu: i.menu().to_string(),
                parent: i.parent_id().map(ItemId::get),
                url: Some(i.url().to_string()).filter(|u| !u.is_empty()),
            })
            .collect(),
    }
}
