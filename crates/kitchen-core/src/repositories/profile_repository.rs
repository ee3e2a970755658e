//! Profile repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Profile;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Profile>, DomainError>;
}
