use std::sync::Arc;

use kitchen_core::services::{AdminService, AuthService, CatalogService, DirectoryService};
use kitchen_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub directory: Arc<DirectoryService>,
    pub admin: Arc<AdminService>,
    pub config: AppConfig,
}
