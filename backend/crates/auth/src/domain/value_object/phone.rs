//! Phone Number Value Object
//!
//! Vietnamese mobile numbers only, matching the account system's market:
//! `0` or `+84` prefix, a valid carrier prefix, then seven digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when phone validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("phone must be a valid Vietnamese mobile number")]
pub struct PhoneError;

/// Validated Vietnamese mobile number
///
/// Stored exactly as entered (prefix preserved); equality is on the
/// stored form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, PhoneError> {
        let trimmed = input.as_ref().trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(PhoneError)
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate `(0|+84)` + carrier prefix + seven digits
    fn is_valid(phone: &str) -> bool {
        let rest = if let Some(rest) = phone.strip_prefix("+84") {
            rest
        } else if let Some(rest) = phone.strip_prefix('0') {
            rest
        } else {
            return false;
        };

        let digits: Vec<u8> = rest
            .bytes()
            .map(|b| b.wrapping_sub(b'0'))
            .collect();
        if digits.len() != 9 || digits.iter().any(|&d| d > 9) {
            return false;
        }

        // Carrier prefixes in service: 3[2-9], 5[2689], 7[06-9], 8[1-689], 9[0-46-9]
        match (digits[0], digits[1]) {
            (3, 2..=9) => true,
            (5, 2 | 6 | 8 | 9) => true,
            (7, 0 | 6..=9) => true,
            (8, 1..=6 | 8 | 9) => true,
            (9, 0..=4 | 6..=9) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_local_prefix() {
        assert!(PhoneNumber::new("0321234567").is_ok());
        assert!(PhoneNumber::new("0912345678").is_ok());
        assert!(PhoneNumber::new("0709876543").is_ok());
    }

    #[test]
    fn test_valid_international_prefix() {
        assert!(PhoneNumber::new("+84321234567").is_ok());
        assert!(PhoneNumber::new("+84961234567").is_ok());
    }

    #[test]
    fn test_invalid_carrier_prefix() {
        // 31x and 95x are not in service
        assert!(PhoneNumber::new("0311234567").is_err());
        assert!(PhoneNumber::new("0951234567").is_err());
        // 4x and 6x are landline/unused ranges
        assert!(PhoneNumber::new("0412345678").is_err());
        assert!(PhoneNumber::new("0612345678").is_err());
    }

    #[test]
    fn test_wrong_length() {
        assert!(PhoneNumber::new("032123456").is_err());
        assert!(PhoneNumber::new("03212345678").is_err());
    }

    #[test]
    fn test_non_digits() {
        assert!(PhoneNumber::new("09123abc78").is_err());
        assert!(PhoneNumber::new("").is_err());
    }

    #[test]
    fn test_missing_prefix() {
        assert!(PhoneNumber::new("912345678").is_err());
    }
}
