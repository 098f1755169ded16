//! Sign Out Use Case
//!
//! Deletes the server-side session; the handler clears the cookie.

use std::sync::Arc;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session the token points at, if the token verifies.
    /// Invalid tokens are a no-op: the cookie gets cleared either way.
    pub async fn execute(&self, session_token: &str, fingerprint_hash: &[u8]) -> AuthResult<()> {
        let check = CheckSessionUseCase::new(self.session_repo.clone(), self.config.clone());

        if let Ok(session) = check.get_session(session_token, fingerprint_hash).await {
            self.session_repo.delete(session.session_id).await?;
            tracing::info!(session_id = %session.session_id, "User signed out");
        }

        Ok(())
    }
}
