//! Domain Layer
//!
//! The core of treemenu: menu entities and the tree-building logic, without
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menus, items and the whole catalog
//! - `value_objects/` - Item ids and request query parameters
//! - `services/` - Tree building, query pass-through, link derivation, integrity checks
//! - `ports/` - Storage interface implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Services borrow their inputs and build new values
//! 3. **Ports & Adapters** - Storage goes through the `MenuRepository` trait

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
