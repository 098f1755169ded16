//! Delete Category Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Category;
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

/// Delete Category Use Case
///
/// Deletion is refused while child categories or products still reference
/// the node, so the tree never contains dangling parent links.
pub struct DeleteCategoryUseCase<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    category_repo: Arc<C>,
    product_repo: Arc<P>,
}

impl<C, P> DeleteCategoryUseCase<C, P>
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

    pub async fn execute(&self, id: Uuid) -> CatalogResult<Category> {
        if self.category_repo.has_children(id).await? {
            return Err(CatalogError::HasChildren);
        }

        if self.product_repo.exists_by_category(id).await? {
            return Err(CatalogError::InUseByProducts);
        }

        let deleted = self
            .category_repo
            .delete(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)?;

        tracing::info!(category_id = %deleted.id, "Category deleted");

        Ok(deleted)
    }
}
