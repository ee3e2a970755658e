//! Location repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Location;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations, is_default descending then name ascending.
    async fn list(&self) -> Result<Vec<Location>, DomainError>;

    /// Active locations only, same ordering as `list`.
    async fn list_active(&self) -> Result<Vec<Location>, DomainError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Location>, DomainError>;
    async fn create(&self, location: &Location) -> Result<Location, DomainError>;
    async fn update(&self, location: &Location) -> Result<Location, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
