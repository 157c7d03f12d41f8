//! Catalog entity
//!
//! Snapshot of everything a store holds: all menus and all items, in
//! storage order.

use crate::domain::value_objects::ItemId;

use super::{Menu, MenuItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    pub menus: Vec<Menu>,
    pub items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self, title: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.title == title)
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn item_by_slug(&self, slug: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.slug() == slug)
    }

    /// Items of one menu, in storage order
    pub fn items_of<'a>(&'a self, menu_title: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |i| i.menu() == menu_title)
    }

    /// One past the largest menu id; `None` when that overflows
    pub fn next_menu_id(&self) -> Option<u64> {
        match self.menus.iter().map(|m| m.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// One past the largest item id; `None` when that overflows
    pub fn next_item_id(&self) -> Option<ItemId> {
        match self.items.iter().map(MenuItem::id).max() {
            Some(max) => max.next(),
            None => Some(ItemId::new(1)),
        }
    }
}
