//! Application-wide constants

/// Label substituted for a null or empty menu-item category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Sort key assumed for categories whose items never set one.
pub const DEFAULT_CATEGORY_SORT_ORDER: i32 = 100;

pub const SESSION_TOKEN_BYTES: usize = 32;
