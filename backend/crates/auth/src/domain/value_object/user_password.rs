//! User Password Value Object
//!
//! Domain wrapper over the platform's Argon2id machinery. The clear text
//! type is re-exported so use cases validate and hash without touching
//! `platform` directly.

pub use platform::password::{ClearTextPassword, PasswordHashError, PasswordPolicyError};

use platform::password::HashedPassword;

/// Stored password credential (Argon2id, PHC string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated clear text password
    pub fn from_raw(
        raw: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self(raw.hash(pepper)?))
    }

    /// Load from a stored PHC string
    pub fn from_phc(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self(HashedPassword::from_phc(phc)?))
    }

    /// Verify a clear text password against this credential
    pub fn verify(
        &self,
        raw: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        self.0.verify(raw, pepper)
    }

    /// PHC string for database storage
    pub fn as_phc(&self) -> &str {
        self.0.as_phc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_roundtrip() {
        let raw = ClearTextPassword::new("mật khẩu".to_string()).unwrap();
        let password = UserPassword::from_raw(&raw, None).unwrap();

        assert!(password.verify(&raw, None).unwrap());

        let wrong = ClearTextPassword::new("khác hẳn".to_string()).unwrap();
        assert!(!password.verify(&wrong, None).unwrap());
    }

    #[test]
    fn test_phc_roundtrip() {
        let raw = ClearTextPassword::new("secret123".to_string()).unwrap();
        let password = UserPassword::from_raw(&raw, None).unwrap();

        let reloaded = UserPassword::from_phc(password.as_phc()).unwrap();
        assert!(reloaded.verify(&raw, None).unwrap());
    }
}
