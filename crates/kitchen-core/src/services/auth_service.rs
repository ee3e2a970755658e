// ============================================================================
// Kitchen Core - Authentication Service
// File: crates/kitchen-core/src/services/auth_service.rs
// ============================================================================
//! Login/logout against gateway-held profiles, plus admin authorization.

use std::sync::Arc;

use kitchen_security::{PasswordService, Session};
use kitchen_shared::utils::mask_email;
use tracing::{info, warn};

use crate::domain::Profile;
use crate::error::DomainError;
use crate::repositories::{ProfileRepository, SessionRepository};

pub struct AuthService {
    profiles: Arc<dyn ProfileRepository>,
    sessions: Arc<dyn SessionRepository>,
    session_ttl_seconds: i64,
}

impl AuthService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        sessions: Arc<dyn SessionRepository>,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            profiles,
            sessions,
            session_ttl_seconds,
        }
    }

    /// Login with email and password. Unknown email and wrong password
    /// collapse into the same `InvalidCredentials` answer.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        info!("Login attempt for {}", mask_email(email));

        let profile = self
            .profiles
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email {}", mask_email(email));
                DomainError::InvalidCredentials
            })?;

        let stored_hash = profile
            .password_hash
            .as_ref()
            .ok_or(DomainError::InvalidCredentials)?;

        let password_valid = PasswordService::verify(password, stored_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        let session = Session::new(
            profile.id,
            profile.email.clone(),
            profile.role.as_str().to_string(),
            self.session_ttl_seconds,
        );
        self.sessions.put(&session).await?;

        info!("Login successful for {}", mask_email(email));
        Ok(session)
    }

    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.remove(token).await
    }

    /// Resolve a session token to an admin profile. The role is re-read
    /// from the gateway on every call; the session's own role copy is only
    /// ever informational.
    pub async fn authorize_admin(&self, token: &str) -> Result<Profile, DomainError> {
        let session = self
            .sessions
            .get(token)
            .await?
            .ok_or(DomainError::NotAuthenticated)?;

        if session.is_expired() {
            self.sessions.remove(token).await?;
            return Err(DomainError::SessionExpired);
        }

        let profile = self
            .profiles
            .find_by_id(&session.user_id)
            .await?
            .ok_or(DomainError::NotAuthenticated)?;

        if !profile.is_admin() {
            warn!(
                "Admin access denied for {}: role is {}",
                mask_email(&profile.email),
                profile.role.as_str()
            );
            return Err(DomainError::Forbidden);
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::repositories::profile_repository::MockProfileRepository;
    use crate::repositories::session_repository::MockSessionRepository;
    use uuid::Uuid;

    fn profile(role: UserRole, password: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "owner@kitchens.example".to_string(),
            password_hash: Some(PasswordService::hash(password).unwrap()),
            full_name: None,
            role,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let stored = profile(UserRole::Admin, "right-password");

        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_email()
            .returning(move |_| Ok(Some(stored.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_put().never();

        let service = AuthService::new(Arc::new(profiles), Arc::new(sessions), 3600);
        let result = service.login("owner@kitchens.example", "wrong").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_issues_session() {
        let stored = profile(UserRole::Admin, "right-password");
        let user_id = stored.id;

        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_email()
            .returning(move |_| Ok(Some(stored.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_put().times(1).returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(profiles), Arc::new(sessions), 3600);
        let session = service
            .login("owner@kitchens.example", "right-password")
            .await
            .unwrap();
        assert_eq!(session.user_id, user_id);
        assert!(!session.is_expired());
    }

    #[tokio::test]
    async fn test_authorize_admin_rejects_expired_session() {
        let stored = profile(UserRole::Admin, "pw");
        let expired = Session::new(stored.id, stored.email.clone(), "admin".into(), -10);
        let token = expired.token.clone();

        let profiles = MockProfileRepository::new();
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_get()
            .returning(move |_| Ok(Some(expired.clone())));
        sessions.expect_remove().times(1).returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(profiles), Arc::new(sessions), 3600);
        let result = service.authorize_admin(&token).await;
        assert!(matches!(result, Err(DomainError::SessionExpired)));
    }

    #[tokio::test]
    async fn test_authorize_admin_rechecks_role_from_backend() {
        // The session still says "admin" but the gateway row was demoted.
        let demoted = profile(UserRole::User, "pw");
        let session = Session::new(demoted.id, demoted.email.clone(), "admin".into(), 3600);
        let token = session.token.clone();

        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_id()
            .returning(move |_| Ok(Some(demoted.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_get()
            .returning(move |_| Ok(Some(session.clone())));

        let service = AuthService::new(Arc::new(profiles), Arc::new(sessions), 3600);
        let result = service.authorize_admin(&token).await;
        assert!(matches!(result, Err(DomainError::Forbidden)));
    }
}
