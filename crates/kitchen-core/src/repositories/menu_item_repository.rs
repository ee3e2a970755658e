//! Menu item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::MenuItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Items for one kitchen, category ascending then name ascending.
    async fn list_by_kitchen(&self, kitchen_id: &Uuid) -> Result<Vec<MenuItem>, DomainError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError>;
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
