//! API DTOs (Data Transfer Objects)
//!
//! Request shapes are fully optional at the serde level; `validate()`
//! collects one human-readable message per failed field and returns the
//! whole list, so a client sees every problem at once rather than the
//! first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{CategoryInput, ProductInput};
use crate::domain::entities::{Category, Product, ProductDraft};
use crate::domain::repository::{CategoryFilter, Page, ProductFilter};
use crate::domain::value_objects::{
    CategoryName, ColorVariant, DEFAULT_PAGE_SIZE, PageParams, ProductImages, SizeCode,
    SizeStock, SortOrder, SortSpec,
};

// ============================================================================
// Categories
// ============================================================================

/// Request body for POST /categories and PUT /categories/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySaveRequest {
    pub name: Option<String>,
    /// Optional and nullable: absent and `null` both mean "root"
    pub parent_id: Option<String>,
    pub ancestors: Option<Vec<String>>,
    pub level: Option<i64>,
}

impl CategorySaveRequest {
    /// Shape validation, collecting field-level messages
    pub fn validate(self) -> Result<CategoryInput, Vec<String>> {
        let mut errors = Vec::new();

        let name = match &self.name {
            Some(raw) => match CategoryName::new(raw) {
                Ok(name) => Some(name),
                Err(e) => {
                    errors.push(e.to_string());
                    None
                }
            },
            None => {
                errors.push("name is required".to_string());
                None
            }
        };

        let parent_id = match &self.parent_id {
            None => None,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("parentId must be a valid id or null".to_string());
                    None
                }
            },
        };

        let ancestors = match &self.ancestors {
            None => None,
            Some(raw) => match parse_id_list(raw) {
                Some(ids) => Some(ids),
                None => {
                    errors.push("each id in ancestors must be a valid id".to_string());
                    None
                }
            },
        };

        let level = match self.level {
            Some(level) if (1..=3).contains(&level) => Some(level as i16),
            Some(_) => {
                errors.push("level must be an integer between 1 and 3".to_string());
                None
            }
            None => {
                errors.push("level is required".to_string());
                None
            }
        };

        match (name, level) {
            (Some(name), Some(level)) if errors.is_empty() => Ok(CategoryInput {
                name,
                parent_id,
                ancestors,
                level: Some(level),
            }),
            _ => Err(errors),
        }
    }
}

/// Query parameters for GET /categories
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCategoriesQuery {
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
    #[serde(rename = "_page")]
    pub page: Option<String>,
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    #[serde(rename = "_order")]
    pub order: Option<String>,
    /// Exact match on `ancestors[1]` (second-level ancestor)
    pub level1: Option<String>,
    /// Exact match on `ancestors[2]` (third-level ancestor)
    pub level2: Option<String>,
}

impl ListCategoriesQuery {
    pub fn into_parts(self) -> Result<(CategoryFilter, PageParams, SortSpec), Vec<String>> {
        let mut errors = Vec::new();

        let level1 = parse_filter_id(&self.level1, "level1", &mut errors);
        let level2 = parse_filter_id(&self.level2, "level2", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let params = page_params(&self.page, &self.limit);
        let sort = SortSpec {
            field: self.sort.unwrap_or_else(|| "createdAt".to_string()),
            order: SortOrder::from_query(self.order.as_deref()),
        };

        Ok((CategoryFilter { level1, level2 }, params, sort))
    }
}

/// Category wire representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub ancestors: Vec<Uuid>,
    pub level: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            parent_id: category.parent_id,
            ancestors: category.ancestors,
            level: category.level,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

// ============================================================================
// Products
// ============================================================================

/// Request body for POST /products and PUT /products/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSaveRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub sku: Option<String>,
    pub category_id: Option<String>,
    pub category_ancestors: Option<Vec<String>>,
    pub colors: Option<Vec<ColorVariantRequest>>,
    pub images: Option<ProductImagesRequest>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub sizes: Option<Vec<SizeStockRequest>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariantRequest {
    pub base_color: Option<String>,
    pub actual_color: Option<String>,
    pub color_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImagesRequest {
    pub main: Option<String>,
    pub hover: Option<String>,
    #[serde(default)]
    pub product: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeStockRequest {
    pub size: Option<String>,
    pub stock: Option<i64>,
}

impl ProductSaveRequest {
    /// Shape validation, collecting field-level messages
    pub fn validate(self) -> Result<ProductInput, Vec<String>> {
        let mut errors = Vec::new();

        let name = match &self.name {
            Some(raw) if raw.trim().chars().count() >= 2 => Some(raw.trim().to_string()),
            _ => {
                errors.push("name must be at least 2 characters".to_string());
                None
            }
        };

        let price = match self.price {
            Some(price) if price >= 0.0 => Some(price),
            _ => {
                errors.push("price must be greater than or equal to 0".to_string());
                None
            }
        };

        let sku = match &self.sku {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
            _ => {
                errors.push("sku is required".to_string());
                None
            }
        };

        let category_id = match &self.category_id {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("categoryId must be a valid id".to_string());
                    None
                }
            },
            None => {
                errors.push("categoryId must be a valid id".to_string());
                None
            }
        };

        let category_ancestors = match &self.category_ancestors {
            None => None,
            Some(raw) => match parse_id_list(raw) {
                Some(ids) => Some(ids),
                None => {
                    errors.push("each id in categoryAncestors must be a valid id".to_string());
                    None
                }
            },
        };

        let colors = validate_colors(self.colors, &mut errors);
        let images = validate_images(self.images, &mut errors);
        let sizes = validate_sizes(self.sizes, &mut errors);

        match (name, price, sku, category_id, colors, images, sizes) {
            (
                Some(name),
                Some(price),
                Some(sku),
                Some(category_id),
                Some(colors),
                Some(images),
                Some(sizes),
            ) if errors.is_empty() => Ok(ProductInput {
                draft: ProductDraft {
                    name,
                    price,
                    sku,
                    colors,
                    images,
                    short_description: self.short_description,
                    description: self.description,
                    sizes,
                },
                category_id,
                category_ancestors,
            }),
            _ => Err(errors),
        }
    }
}

fn validate_colors(
    colors: Option<Vec<ColorVariantRequest>>,
    errors: &mut Vec<String>,
) -> Option<Vec<ColorVariant>> {
    let message = "at least one color with baseColor, actualColor and colorName is required";

    let Some(colors) = colors else {
        errors.push(message.to_string());
        return None;
    };

    if colors.is_empty() {
        errors.push(message.to_string());
        return None;
    }

    let mut out = Vec::with_capacity(colors.len());
    for color in colors {
        match (
            non_empty(color.base_color),
            non_empty(color.actual_color),
            non_empty(color.color_name),
        ) {
            (Some(base_color), Some(actual_color), Some(color_name)) => out.push(ColorVariant {
                base_color,
                actual_color,
                color_name,
            }),
            _ => {
                errors.push(message.to_string());
                return None;
            }
        }
    }
    Some(out)
}

fn validate_images(
    images: Option<ProductImagesRequest>,
    errors: &mut Vec<String>,
) -> Option<ProductImages> {
    let message = "main and hover images are required";

    let Some(images) = images else {
        errors.push(message.to_string());
        return None;
    };

    match (non_empty(images.main), non_empty(images.hover)) {
        (Some(main), Some(hover)) => Some(ProductImages {
            main,
            hover,
            product: images.product,
        }),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

fn validate_sizes(
    sizes: Option<Vec<SizeStockRequest>>,
    errors: &mut Vec<String>,
) -> Option<Vec<SizeStock>> {
    let message = "at least one size in S, M, L, XL, XXL with non-negative stock is required";

    let Some(sizes) = sizes else {
        errors.push(message.to_string());
        return None;
    };

    if sizes.is_empty() {
        errors.push(message.to_string());
        return None;
    }

    let mut out = Vec::with_capacity(sizes.len());
    for entry in sizes {
        let code = entry.size.as_deref().and_then(SizeCode::parse);
        match (code, entry.stock) {
            (Some(size), Some(stock)) if (0..=i32::MAX as i64).contains(&stock) => {
                out.push(SizeStock {
                    size,
                    stock: stock as i32,
                });
            }
            _ => {
                errors.push(message.to_string());
                return None;
            }
        }
    }
    Some(out)
}

/// Query parameters for GET /products
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
    #[serde(rename = "_page")]
    pub page: Option<String>,
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    #[serde(rename = "_order")]
    pub order: Option<String>,
    pub base_color: Option<String>,
    pub category_id: Option<String>,
}

impl ListProductsQuery {
    pub fn into_parts(self) -> Result<(ProductFilter, PageParams, SortSpec), Vec<String>> {
        let mut errors = Vec::new();

        let category_id = parse_filter_id(&self.category_id, "categoryId", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let params = page_params(&self.page, &self.limit);
        let sort = SortSpec {
            field: self.sort.unwrap_or_else(|| "price".to_string()),
            order: SortOrder::from_query(self.order.as_deref()),
        };

        Ok((
            ProductFilter {
                base_color: self.base_color,
                category_id,
            },
            params,
            sort,
        ))
    }
}

/// Product wire representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub sku: String,
    pub category_id: Uuid,
    pub category_ancestors: Vec<Uuid>,
    pub colors: Vec<ColorVariant>,
    pub images: ProductImages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sizes: Vec<SizeStock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            sku: product.sku,
            category_id: product.category_id,
            category_ancestors: product.category_ancestors,
            colors: product.colors,
            images: product.images,
            short_description: product.short_description,
            description: product.description,
            sizes: product.sizes,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

// ============================================================================
// Shared envelopes
// ============================================================================

/// Paginated listing envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub docs: Vec<T>,
    pub total_docs: i64,
    pub limit: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl<T> PageResponse<T> {
    pub fn from_page<S>(page: Page<S>) -> Self
    where
        T: From<S>,
    {
        let page = page.map(T::from);
        Self {
            docs: page.docs,
            total_docs: page.total_docs,
            limit: page.limit,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// Envelope for update/delete responses
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse<T> {
    pub message: &'static str,
    pub data: T,
}

// ============================================================================
// Helpers
// ============================================================================

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_id_list(raw: &[String]) -> Option<Vec<Uuid>> {
    raw.iter()
        .map(|s| Uuid::parse_str(s).ok())
        .collect::<Option<Vec<_>>>()
}

fn parse_filter_id(
    raw: &Option<String>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<Uuid> {
    match raw {
        None => None,
        Some(s) => match Uuid::parse_str(s) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(format!("{field} must be a valid id"));
                None
            }
        },
    }
}

/// Parse `_page`/`_limit`, falling back to defaults on garbage the same
/// way `parseInt` clients expect; bounds are clamped, not rejected.
fn page_params(page: &Option<String>, limit: &Option<String>) -> PageParams {
    let page = page.as_deref().and_then(|s| s.parse().ok()).unwrap_or(1);
    let limit = limit
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);
    PageParams::new(page, limit)
}
