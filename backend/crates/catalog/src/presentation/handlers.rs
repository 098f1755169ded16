//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateCategoryUseCase, CreateProductUseCase, DeleteCategoryUseCase, DeleteProductUseCase,
    GetCategoryUseCase, GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase,
    UpdateCategoryUseCase, UpdateProductUseCase,
};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    CategoryResponse, CategorySaveRequest, ListCategoriesQuery, ListProductsQuery,
    MutationResponse, PageResponse, ProductResponse, ProductSaveRequest,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Categories
// ============================================================================

/// POST /api/categories
pub async fn create_category<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CategorySaveRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(CatalogError::Validation)?;

    let use_case = CreateCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse::from(category)),
    ))
}

/// GET /api/categories
pub async fn list_categories<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ListCategoriesQuery>,
) -> CatalogResult<Json<PageResponse<CategoryResponse>>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let (filter, params, sort) = query.into_parts().map_err(CatalogError::Validation)?;

    let use_case = ListCategoriesUseCase::new(state.repo.clone());
    let page = use_case.execute(filter, params, sort).await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// GET /api/categories/{id}
pub async fn get_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<CategoryResponse>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(id).await?;

    Ok(Json(CategoryResponse::from(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<CategorySaveRequest>,
) -> CatalogResult<Json<MutationResponse<CategoryResponse>>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(CatalogError::Validation)?;

    let use_case = UpdateCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(id, input).await?;

    Ok(Json(MutationResponse {
        message: "Category updated",
        data: CategoryResponse::from(category),
    }))
}

/// DELETE /api/categories/{id}
pub async fn delete_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<MutationResponse<CategoryResponse>>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCategoryUseCase::new(state.repo.clone(), state.repo.clone());
    let category = use_case.execute(id).await?;

    Ok(Json(MutationResponse {
        message: "Category deleted",
        data: CategoryResponse::from(category),
    }))
}

// ============================================================================
// Products
// ============================================================================

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<ProductSaveRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(CatalogError::Validation)?;

    let use_case = CreateProductUseCase::new(state.repo.clone(), state.repo.clone());
    let product = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ListProductsQuery>,
) -> CatalogResult<Json<PageResponse<ProductResponse>>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let (filter, params, sort) = query.into_parts().map_err(CatalogError::Validation)?;

    let use_case = ListProductsUseCase::new(state.repo.clone());
    let page = use_case.execute(filter, params, sort).await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// GET /api/products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProductUseCase::new(state.repo.clone());
    let product = use_case.execute(id).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// PUT /api/products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProductSaveRequest>,
) -> CatalogResult<Json<MutationResponse<ProductResponse>>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let input = req.validate().map_err(CatalogError::Validation)?;

    let use_case = UpdateProductUseCase::new(state.repo.clone(), state.repo.clone());
    let product = use_case.execute(id, input).await?;

    Ok(Json(MutationResponse {
        message: "Product updated",
        data: ProductResponse::from(product),
    }))
}

/// DELETE /api/products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<MutationResponse<ProductResponse>>>
where
    R: CategoryRepository + ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone());
    let product = use_case.execute(id).await?;

    Ok(Json(MutationResponse {
        message: "Product deleted",
        data: ProductResponse::from(product),
    }))
}
