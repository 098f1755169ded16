//! Create Product Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

/// Shape-validated product input, shared by create and update
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub draft: ProductDraft,
    pub category_id: Uuid,
    /// Caller-asserted snapshot; verified against the category's actual
    /// chain, never stored as-is
    pub category_ancestors: Option<Vec<Uuid>>,
}

/// Create Product Use Case
///
/// Resolves the referenced category and denormalizes its ancestor chain
/// onto the product. The category read and the product write are two
/// separate non-atomic operations; a concurrent category move can leave
/// the snapshot one step behind (accepted, documented race).
pub struct CreateProductUseCase<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    category_repo: Arc<C>,
    product_repo: Arc<P>,
}

impl<C, P> CreateProductUseCase<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    pub fn new(category_repo: Arc<C>, product_repo: Arc<P>) -> Self {
        Self {
            category_repo,
            product_repo,
        }
    }

    pub async fn execute(&self, input: ProductInput) -> CatalogResult<Product> {
        let category = self
            .category_repo
            .find_by_id(input.category_id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)?;

        if let Some(submitted) = &input.category_ancestors {
            if submitted != &category.ancestors {
                return Err(CatalogError::Inconsistent(format!(
                    "submitted categoryAncestors do not match the category's chain \
                     (expected {:?}, got {:?})",
                    category.ancestors, submitted
                )));
            }
        }

        let product = Product::new(input.draft, &category);

        self.product_repo.create(&product).await?;

        tracing::info!(
            product_id = %product.id,
            category_id = %product.category_id,
            "Product created"
        );

        Ok(product)
    }
}
