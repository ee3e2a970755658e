//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Kitchen not found")]
    KitchenNotFound,

    #[error("Menu item not found")]
    MenuItemNotFound,

    #[error("Ordering link not found")]
    OrderingLinkNotFound,

    #[error("Location not found")]
    LocationNotFound,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session expired")]
    SessionExpired,

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Admin role required")]
    Forbidden,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Gateway error: {0}")]
    GatewayError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
