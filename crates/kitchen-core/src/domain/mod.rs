//! # Kitchen Core - Domain Module
//!
//! Domain entities for the cloud-kitchen portal.

pub mod category;
pub mod kitchen;
pub mod location;
pub mod menu_item;
pub mod ordering_link;
pub mod profile;

use regex::Regex;
use std::sync::LazyLock;

// Re-export all entities and enums
pub use category::{group_by_category, CategoryGroup};
pub use kitchen::{Kitchen, KitchenWithRelations};
pub use location::Location;
pub use menu_item::{parse_tags, MenuItem};
pub use ordering_link::OrderingLink;
pub use profile::{Profile, UserRole};

/// Digits, spaces, dashes, and parentheses only.
pub static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-\(\)]*$").unwrap());
