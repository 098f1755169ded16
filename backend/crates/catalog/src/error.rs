//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::hierarchy::HierarchyError;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status
/// codes and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request shape is invalid; carries one message per failed field
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Submitted parentId does not reference an existing category
    #[error("Parent category not found")]
    ParentNotFound,

    /// Category lookup by id failed (also used for a product's categoryId
    /// reference to a category that does not exist)
    #[error("Category not found")]
    CategoryNotFound,

    /// Product lookup by id failed
    #[error("Product not found")]
    ProductNotFound,

    /// Caller-asserted derived fields disagree with the authoritative chain
    #[error("Hierarchy inconsistency: {0}")]
    Inconsistent(String),

    /// Category still has child categories
    #[error("Category has child categories")]
    HasChildren,

    /// Category is still referenced by products
    #[error("Category is referenced by products")]
    InUseByProducts,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::ParentNotFound
            | CatalogError::CategoryNotFound
            | CatalogError::ProductNotFound => StatusCode::NOT_FOUND,
            CatalogError::Inconsistent(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::HasChildren | CatalogError::InUseByProducts => StatusCode::CONFLICT,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::ParentNotFound
            | CatalogError::CategoryNotFound
            | CatalogError::ProductNotFound => ErrorKind::NotFound,
            CatalogError::Inconsistent(_) => ErrorKind::UnprocessableEntity,
            CatalogError::HasChildren | CatalogError::InUseByProducts => ErrorKind::Conflict,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Inconsistent(msg) => {
                tracing::warn!(message = %msg, "Rejected inconsistent hierarchy submission");
            }
            CatalogError::HasChildren | CatalogError::InUseByProducts => {
                tracing::warn!(error = %self, "Rejected delete of referenced category");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<HierarchyError> for CatalogError {
    fn from(err: HierarchyError) -> Self {
        match err {
            // Depth and cycle violations are shape problems per the API
            // contract: the submitted node can never exist in a valid tree.
            HierarchyError::DepthExceeded { .. }
            | HierarchyError::SelfParent
            | HierarchyError::CycleDetected => CatalogError::Validation(vec![err.to_string()]),
            HierarchyError::AncestorMismatch { .. } | HierarchyError::LevelMismatch { .. } => {
                CatalogError::Inconsistent(err.to_string())
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Validation failures list one message per field, matching the
            // `{"errors": [...]}` wire contract
            CatalogError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            other => AppError::from(other).into_response(),
        }
    }
}
