use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Account status
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserStatus {
    #[default]
    #[display("active")]
    Active = 0,
    #[display("disabled")]
    Disabled = 1,
}

impl UserStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn can_login(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            1 => UserStatus::Disabled,
            _ => UserStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(UserStatus::from_id(UserStatus::Active.id()), UserStatus::Active);
        assert_eq!(
            UserStatus::from_id(UserStatus::Disabled.id()),
            UserStatus::Disabled
        );
    }

    #[test]
    fn test_can_login() {
        assert!(UserStatus::Active.can_login());
        assert!(!UserStatus::Disabled.can_login());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserStatus::Active.to_string(), "active");
        assert_eq!(UserStatus::Disabled.to_string(), "disabled");
    }
}
