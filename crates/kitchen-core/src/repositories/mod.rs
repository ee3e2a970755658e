//! Repository traits (ports)

pub mod kitchen_repository;
pub mod location_repository;
pub mod menu_item_repository;
pub mod ordering_link_repository;
pub mod profile_repository;
pub mod session_repository;

pub use kitchen_repository::KitchenRepository;
pub use location_repository::LocationRepository;
pub use menu_item_repository::MenuItemRepository;
pub use ordering_link_repository::OrderingLinkRepository;
pub use profile_repository::ProfileRepository;
pub use session_repository::SessionRepository;
