//! User Entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_object::{
    email::Email, person_name::PersonName, phone::PhoneNumber, public_id::PublicId, sex::Sex,
    user_id::UserId, user_password::UserPassword, user_role::UserRole, user_status::UserStatus,
};

/// Shipping/contact address block captured at sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub district: String,
    pub commune: String,
    pub street: String,
}

/// User entity: account profile plus credential
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Public ID for API responses
    pub public_id: PublicId,
    /// Account identifier (unique, lowercase)
    pub email: Email,
    pub password: UserPassword,
    pub full_name: PersonName,
    pub given_name: String,
    pub phone: PhoneNumber,
    pub birth_date: Option<NaiveDate>,
    pub sex: Sex,
    pub address: Address,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields collected at sign-up (everything but the credential)
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub email: Email,
    pub full_name: PersonName,
    pub given_name: String,
    pub phone: PhoneNumber,
    pub birth_date: Option<NaiveDate>,
    pub sex: Sex,
    pub address: Address,
}

impl User {
    /// Create a new customer account
    pub fn new(profile: UserProfile, password: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            email: profile.email,
            password,
            full_name: profile.full_name,
            given_name: profile.given_name,
            phone: profile.phone,
            birth_date: profile.birth_date,
            sex: profile.sex,
            address: profile.address,
            role: UserRole::Customer,
            status: UserStatus::Active,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account may sign in
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Record a successful sign-in
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
