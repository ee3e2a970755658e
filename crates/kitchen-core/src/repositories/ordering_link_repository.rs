//! Ordering link repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::OrderingLink;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderingLinkRepository: Send + Sync {
    async fn list_by_kitchen(&self, kitchen_id: &Uuid) -> Result<Vec<OrderingLink>, DomainError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<OrderingLink>, DomainError>;
    async fn create(&self, link: &OrderingLink) -> Result<OrderingLink, DomainError>;
    async fn update(&self, link: &OrderingLink) -> Result<OrderingLink, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), DomainError>;
}
