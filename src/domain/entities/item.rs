//! MenuItem entity - a single navigable entry of a menu
//!
//! Items are stored flat; nesting is expressed through `parent_id`.

use serde::Serialize;

use crate::domain::value_objects::ItemId;

/// A menu item as read from storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Unique across all menus
    id: ItemId,
    /// Owning item, `None` for top-level items
    parent_id: Option<ItemId>,
    /// Display text
    title: String,
    /// Unique slug used by redirect resolution
    slug: String,
    /// Canonical link (see `services::links`)
    url: String,
    /// Title of the menu this item belongs to
    menu: String,
}

impl MenuItem {
    /// Create a top-level item with no url yet
    pub fn new(
        id: u64,
        menu: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            parent_id: None,
            title: title.into(),
            slug: slug.into(),
            url: String::new(),
            menu: menu.into(),
        }
    }

    /// Builder: nest under a parent
    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent_id = Some(ItemId::new(parent));
        self
    }

    /// Builder: set the parent (or clear it)
    pub fn with_parent_id(mut self, parent: Option<ItemId>) -> Self {
        self.parent_id = parent;
        self
    }

    /// Builder: set the canonical url
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn parent_id(&self) -> Option<ItemId> {
        self.parent_id
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn menu(&self) -> &str {
        &self.menu
    }
}
