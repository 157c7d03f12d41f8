//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DrawMenuUseCase` - One menu render (fetch, select, build, pass-through)
//! - `RedirectUseCase` - Slug to canonical link
//! - `CatalogAdminUseCase` - Create menus and items
//! - `CheckUseCase` - Store integrity report

pub mod admin;
pub mod check;
pub mod draw_menu;
pub mod redirect;

pub use admin::{slugify, AdminError, CatalogAdminUseCase, NewItem};
pub use check::{CheckReport, CheckUseCase};
pub use draw_menu::{DrawMenuError, DrawMenuUseCase, MenuContext};
pub use redirect::{RedirectError, RedirectUseCase};
