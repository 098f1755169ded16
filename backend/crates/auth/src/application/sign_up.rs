//! Sign Up Use Case
//!
//! Creates a new customer account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{ClearTextPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Sign up input: a shape-validated profile plus the clear text credential
#[derive(Debug)]
pub struct SignUpInput {
    pub profile: UserProfile,
    pub password: ClearTextPassword,
}

/// Sign up output
pub struct SignUpOutput {
    pub public_id: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        if self.user_repo.exists_by_email(&input.profile.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = UserPassword::from_raw(&input.password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(input.profile, password);

        self.user_repo.create(&user).await?;

        tracing::info!(
            public_id = %user.public_id,
            "User signed up"
        );

        Ok(SignUpOutput {
            public_id: user.public_id.to_string(),
        })
    }
}
