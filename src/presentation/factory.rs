//! Use Case Factory
//!
//! Wires use cases to the file-backed repository described by the config.

use crate::application::{CatalogAdminUseCase, CheckUseCase, DrawMenuUseCase, RedirectUseCase};
use crate::config::Config;
use crate::infrastructure::FileMenuRepository;

pub fn create_repository(config: &Config) -> FileMenuRepository {
    FileMenuRepository::new(config.store.path.clone()).with_links(config.links())
}

pub fn create_draw_menu_use_case(config: &Config) -> DrawMenuUseCase<FileMenuRepository> {
    DrawMenuUseCase::new(create_repository(config))
}

pub fn create_redirect_use_case(config: &Config) -> RedirectUseCase<FileMenuRepository> {
    RedirectUseCase::new(create_repository(config))
}

pub fn create_admin_use_case(config: &Config) -> CatalogAdminUseCase<FileMenuRepository> {
    CatalogAdminUseCase::new(create_repository(config), config.links())
}

pub fn create_check_use_case(config: &Config) -> CheckUseCase<FileMenuRepository> {
    CheckUseCase::new(create_repository(config))
}
