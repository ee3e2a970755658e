//! In-memory session repository

use async_trait::async_trait;
use dashmap::DashMap;

use kitchen_core::error::DomainError;
use kitchen_core::repositories::SessionRepository;
use kitchen_security::Session;

/// Sessions keyed by token. Expired entries are swept on every write;
/// reads hand back whatever is stored and leave the expiry decision to the
/// auth service.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sweep_expired(&self) {
        self.sessions.retain(|_, session| !session.is_expired());
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn put(&self, session: &Session) -> Result<(), DomainError> {
        self.sweep_expired();
        self.sessions
            .insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.get(token).map(|entry| entry.value().clone()))
    }

    async fn remove(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session(ttl: i64) -> Session {
        Session::new(Uuid::new_v4(), "a@b.c".into(), "user".into(), ttl)
    }

    #[tokio::test]
    async fn test_put_get_remove_roundtrip() {
        let repo = InMemorySessionRepository::new();
        let session = session(60);

        repo.put(&session).await.unwrap();
        let loaded = repo.get(&session.token).await.unwrap().unwrap();
        assert_eq!(loaded.user_id, session.user_id);

        repo.remove(&session.token).await.unwrap();
        assert!(repo.get(&session.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_sessions_are_swept_on_write() {
        let repo = InMemorySessionRepository::new();
        let dead = session(-10);
        repo.put(&dead).await.unwrap();

        // A later write sweeps the expired entry.
        repo.put(&session(60)).await.unwrap();
        assert!(repo.get(&dead.token).await.unwrap().is_none());
    }
}
