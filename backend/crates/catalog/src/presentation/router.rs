//! Catalog Routers
//!
//! Reads are public; writes are exposed on a separate router so the
//! application can layer the admin gate onto them alone.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the public (read-only) catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create the admin (write) catalog router with PostgreSQL repository
pub fn catalog_admin_router(repo: PgCatalogRepository) -> Router {
    catalog_admin_router_generic(repo)
}

/// Create a generic read-only catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/categories", get(handlers::list_categories::<R>))
        .route("/categories/{id}", get(handlers::get_category::<R>))
        .route("/products", get(handlers::list_products::<R>))
        .route("/products/{id}", get(handlers::get_product::<R>))
        .with_state(state)
}

/// Create a generic write catalog router for any repository implementation
pub fn catalog_admin_router_generic<R>(repo: R) -> Router
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/categories", post(handlers::create_category::<R>))
        .route("/categories/{id}", put(handlers::update_category::<R>))
        .route("/categories/{id}", delete(handlers::delete_category::<R>))
        .route("/products", post(handlers::create_product::<R>))
        .route("/products/{id}", put(handlers::update_product::<R>))
        .route("/products/{id}", delete(handlers::delete_product::<R>))
        .with_state(state)
}
