//! Auth Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers and the admin gate middleware
//!
//! ## Security Model
//! - Credentials are Argon2id hashes; clear text is zeroized after use
//! - Sessions are HTTP-only cookies carrying an HMAC-signed session id,
//!   bound to a User-Agent fingerprint server-side
//! - Catalog reads need no identity; catalog writes go through
//!   [`presentation::middleware::require_admin`]

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_admin};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
