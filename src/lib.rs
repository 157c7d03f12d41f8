//! treemenu - hierarchical navigation menus
//!
//! Operators define menus and nested items; each page render shows the
//! top-level items of a menu with the path to the selected item expanded and
//! every other branch collapsed.
//!
//! The core is [`MenuTreeBuilder`]: it turns the flat item list of one menu
//! and an optional selected id into the partial tree a renderer walks.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DrawMenuError, DrawMenuUseCase, MenuContext};
pub use config::Config;
pub use domain::entities::{Menu, MenuCatalog, MenuItem};
pub use domain::services::{
    passthrough_query, MenuItemNode, MenuTree, MenuTreeBuilder, TreeBuildError,
};
pub use domain::value_objects::{ItemId, QueryParams};
pub use error::{MenuError, MenuResult};
