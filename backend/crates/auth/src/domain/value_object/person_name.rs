//! Person Name Value Object
//!
//! Display names carry diacritics, so input is NFKC-normalized and
//! trimmed; beyond that the only rule is a minimum length.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for a full name (in characters)
pub const PERSON_NAME_MIN_LENGTH: usize = 2;

/// Error returned when person name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonNameError {
    #[error("name must be at least {min} characters")]
    TooShort { min: usize },
}

/// Validated, NFKC-normalized person name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, PersonNameError> {
        let normalized: String = input.as_ref().nfkc().collect::<String>().trim().to_string();
        if normalized.chars().count() < PERSON_NAME_MIN_LENGTH {
            return Err(PersonNameError::TooShort {
                min: PERSON_NAME_MIN_LENGTH,
            });
        }
        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = PersonNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritics_preserved() {
        let name = PersonName::new("Nguyễn Văn An").unwrap();
        assert_eq!(name.as_str(), "Nguyễn Văn An");
    }

    #[test]
    fn test_trimmed() {
        let name = PersonName::new("  Trần Thị Bích  ").unwrap();
        assert_eq!(name.as_str(), "Trần Thị Bích");
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            PersonName::new("A"),
            Err(PersonNameError::TooShort { min: 2 })
        ));
        assert!(PersonName::new("An").is_ok());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(PersonName::new("   ").is_err());
    }
}
