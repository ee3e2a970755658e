//! Domain services

pub mod admin_service;
pub mod auth_service;
pub mod catalog_service;
pub mod directory_service;

pub use admin_service::{
    AdminService, KitchenDraft, LocationDraft, MenuItemDraft, OrderingLinkDraft,
};
pub use auth_service::AuthService;
pub use catalog_service::{CatalogService, KitchenMenu};
pub use directory_service::{DirectoryService, LocationKitchens, ResolvedLocation};
