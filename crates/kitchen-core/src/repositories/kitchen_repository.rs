//! Kitchen repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Kitchen, KitchenWithRelations};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KitchenRepository: Send + Sync {
    /// All kitchens, sort_order ascending.
    async fn list(&self) -> Result<Vec<Kitchen>, DomainError>;

    /// All kitchens with embedded menu items and ordering links.
    async fn list_with_relations(&self) -> Result<Vec<KitchenWithRelations>, DomainError>;

    /// Active kitchens at one location, sort_order ascending, with embedded
    /// menu items and ordering links.
    async fn list_active_by_location(
        &self,
        location_id: &Uuid,
    ) -> Result<Vec<KitchenWithRelations>, DomainError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Kitchen>, DomainError>;

    async fn find_with_relations(
        &self,
        id: &Uuid,
    ) -> Result<Option<KitchenWithRelations>, DomainError>;

    async fn create(&self, kitchen: &Kitchen) -> Result<Kitchen, DomainError>;
    async fn update(&self, kitchen: &Kitchen) -> Result<Kitchen, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
