//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entities::{Category, Product};
use crate::domain::value_objects::{PageParams, SortSpec};
use crate::error::CatalogResult;

/// One page of a list result
///
/// Field names follow the paginated wire contract (`docs`, `totalDocs`, ...).
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub docs: Vec<T>,
    pub total_docs: i64,
    pub limit: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble a page; `total_pages` is at least 1 even for empty results
    pub fn new(docs: Vec<T>, total_docs: i64, params: &PageParams) -> Self {
        let total_pages = (total_docs + params.limit() - 1) / params.limit();
        Self {
            docs,
            total_docs,
            limit: params.limit(),
            page: params.page(),
            total_pages: total_pages.max(1),
        }
    }

    /// Map the page's documents, keeping the pagination envelope
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            docs: self.docs.into_iter().map(f).collect(),
            total_docs: self.total_docs,
            limit: self.limit,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

/// Category list filters
///
/// `level1`/`level2` address positions 1 and 2 (0-indexed) of the ancestor
/// chain: "all categories under branch X" at the second and third level.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub level1: Option<Uuid>,
    pub level2: Option<Uuid>,
}

/// Product list filters
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub base_color: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Persist a new category
    async fn create(&self, category: &Category) -> CatalogResult<()>;

    /// Get a category by id
    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Category>>;

    /// Filtered, sorted, paginated listing (snapshot-less read)
    async fn list(
        &self,
        filter: &CategoryFilter,
        params: &PageParams,
        sort: &SortSpec,
    ) -> CatalogResult<Page<Category>>;

    /// Overwrite an existing category; returns false if the id is unknown
    async fn update(&self, category: &Category) -> CatalogResult<bool>;

    /// Delete and return a category; None if the id is unknown
    async fn delete(&self, id: Uuid) -> CatalogResult<Option<Category>>;

    /// Whether any category has this node as its direct parent
    async fn has_children(&self, id: Uuid) -> CatalogResult<bool>;
}

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    async fn create(&self, product: &Product) -> CatalogResult<()>;

    /// Get a product by id
    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Filtered, sorted, paginated listing
    async fn list(
        &self,
        filter: &ProductFilter,
        params: &PageParams,
        sort: &SortSpec,
    ) -> CatalogResult<Page<Product>>;

    /// Overwrite an existing product; returns false if the id is unknown
    async fn update(&self, product: &Product) -> CatalogResult<bool>;

    /// Delete and return a product; None if the id is unknown
    async fn delete(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Whether any product references this category directly
    async fn exists_by_category(&self, category_id: Uuid) -> CatalogResult<bool>;
}
