//! # Kitchen Infrastructure
//!
//! Adapters: the remote table-query gateway client, per-entity repository
//! implementations, and the in-memory session store.

pub mod gateway;
pub mod session;

pub use gateway::{
    GatewayClient, GatewayKitchenRepository, GatewayLocationRepository,
    GatewayMenuItemRepository, GatewayOrderingLinkRepository, GatewayProfileRepository,
    SelectQuery,
};
pub use session::InMemorySessionRepository;
