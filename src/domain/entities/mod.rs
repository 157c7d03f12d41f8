//! Domain Entities
//!
//! - `Menu` - A named navigation tree
//! - `MenuItem` - A flat, stored menu entry
//! - `MenuCatalog` - Every menu and item of one store

mod catalog;
mod item;
mod menu;

pub use catalog::MenuCatalog;
pub use item::MenuItem;
pub use menu::Menu;
