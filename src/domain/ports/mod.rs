//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod menu_repository;

pub use menu_repository::{MenuRepository, RepositoryError};
