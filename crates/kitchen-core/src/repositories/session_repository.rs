//! Session repository trait (port)
//!
//! Sessions are explicit server-side objects behind this small interface;
//! nothing about an authenticated user is trusted from client storage.

use async_trait::async_trait;
use kitchen_security::Session;

use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn put(&self, session: &Session) -> Result<(), DomainError>;
    async fn get(&self, token: &str) -> Result<Option<Session>, DomainError>;
    async fn remove(&self, token: &str) -> Result<(), DomainError>;
}
