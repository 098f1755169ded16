//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, hierarchy rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Hierarchy Model
//! - Categories form a tree bounded at three levels (roots are level 1)
//! - Each node stores its full ancestor chain, root-first, exclusive of self
//! - The backend is the sole authority for `ancestors` and `level`:
//!   client-supplied values are recomputed server-side and rejected on mismatch
//! - Products denormalize the referenced category's chain at write time
//!   (point-in-time snapshot, never rewritten afterwards)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{catalog_admin_router, catalog_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

#[cfg(test)]
mod tests;
