use serde::{Deserialize, Serialize};
use std::fmt;

/// Account roles, with the wire codes the account system has always used
/// (customers are `1`, admins are `3`; `2` was never assigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Customer = 1,
    Admin = 3,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Map a stored role id; unknown ids degrade to Customer rather than
    /// panicking, and are logged for investigation.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            1 => UserRole::Customer,
            3 => UserRole::Admin,
            _ => {
                tracing::error!(role_id = id, "Unknown UserRole id, treating as customer");
                UserRole::Customer
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => UserRole::Admin,
            _ => UserRole::Customer,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids() {
        assert_eq!(UserRole::Customer.id(), 1);
        assert_eq!(UserRole::Admin.id(), 3);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(UserRole::from_id(1), UserRole::Customer);
        assert_eq!(UserRole::from_id(3), UserRole::Admin);
        // Unknown ids degrade to the unprivileged role
        assert_eq!(UserRole::from_id(2), UserRole::Customer);
        assert_eq!(UserRole::from_id(0), UserRole::Customer);
    }

    #[test]
    fn test_is_admin() {
        assert!(!UserRole::Customer.is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserRole::Customer.to_string(), "customer");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }
}
