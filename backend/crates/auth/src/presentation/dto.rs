//! API DTOs (Data Transfer Objects)
//!
//! Sign-up/sign-in shapes are fully optional at the serde level;
//! `validate()` collects one message per failed field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::{SignInInput, SignUpInput};
use crate::domain::entity::user::{Address, UserProfile};
use crate::domain::value_object::{
    email::Email, person_name::PersonName, phone::PhoneNumber, sex::Sex,
    user_password::ClearTextPassword,
};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub given_name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Birth date, `YYYY-MM-DD`
    pub birth_date: Option<String>,
    /// 0 female, 1 male
    pub sex: Option<i64>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub commune: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignUpRequest {
    /// Shape validation, collecting field-level messages
    pub fn validate(self) -> Result<SignUpInput, Vec<String>> {
        let mut errors = Vec::new();

        let given_name = match &self.given_name {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
            _ => {
                errors.push("givenName is required".to_string());
                None
            }
        };

        let full_name = match &self.full_name {
            Some(raw) => match PersonName::new(raw) {
                Ok(name) => Some(name),
                Err(_) => {
                    errors.push("fullName must be at least 2 characters".to_string());
                    None
                }
            },
            None => {
                errors.push("fullName must be at least 2 characters".to_string());
                None
            }
        };

        let email = match &self.email {
            Some(raw) => match Email::new(raw.clone()) {
                Ok(email) => Some(email),
                Err(_) => {
                    errors.push("email format is invalid".to_string());
                    None
                }
            },
            None => {
                errors.push("email format is invalid".to_string());
                None
            }
        };

        let phone = match &self.phone {
            Some(raw) => match PhoneNumber::new(raw) {
                Ok(phone) => Some(phone),
                Err(e) => {
                    errors.push(e.to_string());
                    None
                }
            },
            None => {
                errors.push("phone must be a valid Vietnamese mobile number".to_string());
                None
            }
        };

        let birth_date = match &self.birth_date {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("birthDate must be in YYYY-MM-DD format".to_string());
                    None
                }
            },
            None => {
                errors.push("birthDate must be in YYYY-MM-DD format".to_string());
                None
            }
        };

        let sex = match self.sex.and_then(|id| {
            i16::try_from(id).ok().and_then(Sex::from_id)
        }) {
            Some(sex) => Some(sex),
            None => {
                errors.push("sex must be 0 or 1".to_string());
                None
            }
        };

        let city = required_field(&self.city, "city", &mut errors);
        let district = required_field(&self.district, "district", &mut errors);
        let commune = required_field(&self.commune, "commune", &mut errors);

        let street = match &self.address {
            Some(raw) if raw.trim().chars().count() >= 2 => Some(raw.trim().to_string()),
            _ => {
                errors.push("address must be at least 2 characters".to_string());
                None
            }
        };

        // Compare raw strings before the clear text is consumed by hashing
        if self.password != self.confirm_password {
            errors.push("passwords do not match".to_string());
        }

        let password = match self.password {
            Some(raw) => match ClearTextPassword::new(raw) {
                Ok(password) => Some(password),
                Err(e) => {
                    errors.push(e.to_string());
                    None
                }
            },
            None => {
                errors.push("password must be at least 6 characters".to_string());
                None
            }
        };

        match (
            given_name, full_name, email, phone, birth_date, sex, city, district, commune, street,
            password,
        ) {
            (
                Some(given_name),
                Some(full_name),
                Some(email),
                Some(phone),
                Some(birth_date),
                Some(sex),
                Some(city),
                Some(district),
                Some(commune),
                Some(street),
                Some(password),
            ) if errors.is_empty() => Ok(SignUpInput {
                profile: UserProfile {
                    email,
                    full_name,
                    given_name,
                    phone,
                    birth_date: Some(birth_date),
                    sex,
                    address: Address {
                        city,
                        district,
                        commune,
                        street,
                    },
                },
                password,
            }),
            _ => Err(errors),
        }
    }
}

fn required_field(value: &Option<String>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
        _ => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub public_id: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub remember_me: bool,
}

impl SignInRequest {
    /// Shape validation, collecting field-level messages
    pub fn validate(self) -> Result<SignInInput, Vec<String>> {
        let mut errors = Vec::new();

        let email = match &self.email {
            Some(raw) => match Email::new(raw.clone()) {
                Ok(email) => Some(email),
                Err(_) => {
                    errors.push("email format is invalid".to_string());
                    None
                }
            },
            None => {
                errors.push("email format is invalid".to_string());
                None
            }
        };

        let password = match self.password {
            Some(raw) => match ClearTextPassword::new(raw) {
                Ok(password) => Some(password),
                Err(_) => {
                    errors.push("password must be at least 6 characters".to_string());
                    None
                }
            },
            None => {
                errors.push("password must be at least 6 characters".to_string());
                None
            }
        };

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(SignInInput {
                email,
                password,
                remember_me: self.remember_me,
            }),
            _ => Err(errors),
        }
    }
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub public_id: String,
    pub role: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub public_id: Option<String>,
    pub user_role: Option<String>,
    pub expires_at_ms: Option<i64>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            public_id: None,
            user_role: None,
            expires_at_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_sign_up() -> SignUpRequest {
        SignUpRequest {
            given_name: Some("An".to_string()),
            full_name: Some("Nguyễn Văn An".to_string()),
            email: Some("an@example.com".to_string()),
            phone: Some("0912345678".to_string()),
            birth_date: Some("1998-04-21".to_string()),
            sex: Some(1),
            city: Some("Hà Nội".to_string()),
            district: Some("Cầu Giấy".to_string()),
            commune: Some("Dịch Vọng".to_string()),
            address: Some("12 Trần Thái Tông".to_string()),
            password: Some("password123".to_string()),
            confirm_password: Some("password123".to_string()),
        }
    }

    #[test]
    fn test_valid_sign_up() {
        let input = base_sign_up().validate().unwrap();
        assert_eq!(input.profile.email.as_str(), "an@example.com");
        assert_eq!(input.profile.full_name.as_str(), "Nguyễn Văn An");
        assert_eq!(input.profile.address.city, "Hà Nội");
    }

    #[test]
    fn test_password_mismatch() {
        let request = SignUpRequest {
            confirm_password: Some("different123".to_string()),
            ..base_sign_up()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["passwords do not match"]);
    }

    #[test]
    fn test_invalid_email_and_phone_collected() {
        let request = SignUpRequest {
            email: Some("not-an-email".to_string()),
            phone: Some("12345".to_string()),
            ..base_sign_up()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_invalid_birth_date() {
        let request = SignUpRequest {
            birth_date: Some("21-04-1998".to_string()),
            ..base_sign_up()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["birthDate must be in YYYY-MM-DD format"]);
    }

    #[test]
    fn test_invalid_sex() {
        let request = SignUpRequest {
            sex: Some(2),
            ..base_sign_up()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["sex must be 0 or 1"]);
    }

    #[test]
    fn test_sign_in_validation() {
        let request = SignInRequest {
            email: Some("an@example.com".to_string()),
            password: Some("password123".to_string()),
            remember_me: true,
        };
        let input = request.validate().unwrap();
        assert!(input.remember_me);

        let request = SignInRequest {
            email: Some("bad".to_string()),
            password: Some("123".to_string()),
            remember_me: false,
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_sign_in_remember_me_defaults_false() {
        let json = r#"{"email":"an@example.com","password":"password123"}"#;
        let request: SignInRequest = serde_json::from_str(json).unwrap();
        assert!(!request.remember_me);
    }
}
