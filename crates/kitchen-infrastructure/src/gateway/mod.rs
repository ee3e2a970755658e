//! Remote table-query gateway: client, query builder, repository adapters.

pub mod client;
pub mod query;
mod rows;

pub mod kitchen_repo_impl;
pub mod location_repo_impl;
pub mod menu_item_repo_impl;
pub mod ordering_link_repo_impl;
pub mod profile_repo_impl;

pub use client::GatewayClient;
pub use kitchen_repo_impl::GatewayKitchenRepository;
pub use location_repo_impl::GatewayLocationRepository;
pub use menu_item_repo_impl::GatewayMenuItemRepository;
pub use ordering_link_repo_impl::GatewayOrderingLinkRepository;
pub use profile_repo_impl::GatewayProfileRepository;
pub use query::SelectQuery;
