//! Update Product Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::application::create_product::ProductInput;
use crate::domain::entities::Product;
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

/// Update Product Use Case
///
/// Same validation as create; the category chain snapshot is re-taken at
/// update time.
pub struct UpdateProductUseCase<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    category_repo: Arc<C>,
    product_repo: Arc<P>,
}

impl<C, P> UpdateProductUseCase<C, P>
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

    pub async fn execute(&self, id: Uuid, input: ProductInput) -> CatalogResult<Product> {
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

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

        product.apply_update(input.draft, &category);

        let updated = self.product_repo.update(&product).await?;
        if !updated {
            return Err(CatalogError::ProductNotFound);
        }

        tracing::info!(
            product_id = %product.id,
            category_id = %product.category_id,
            "Product updated"
        );

        Ok(product)
    }
}
