//! Update Category Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::application::create_category::CategoryInput;
use crate::domain::entities::Category;
use crate::domain::hierarchy::{check_reparent, derive_ancestry};
use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult};

/// Update Category Use Case
///
/// Recomputes `ancestors`/`level` from the (possibly new) parent chain.
/// Known gap, kept deliberately: the new chain is NOT cascaded to
/// descendant categories or to product snapshots; their stored chains go
/// stale until they are individually written again.
pub struct UpdateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> UpdateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: Uuid, input: CategoryInput) -> CatalogResult<Category> {
        let mut category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)?;

        let parent = match input.parent_id {
            Some(parent_id) => {
                let parent = self
                    .category_repo
                    .find_by_id(parent_id)
                    .await?
                    .ok_or(CatalogError::ParentNotFound)?;
                check_reparent(category.id, &parent)?;
                Some(parent)
            }
            None => None,
        };

        let ancestry = derive_ancestry(parent.as_ref())?;
        ancestry.verify_submitted(input.ancestors.as_deref(), input.level)?;

        category.apply_update(input.name, input.parent_id, ancestry);

        let updated = self.category_repo.update(&category).await?;
        if !updated {
            // Deleted out from under us between the read and the write
            return Err(CatalogError::CategoryNotFound);
        }

        tracing::info!(
            category_id = %category.id,
            level = category.level,
            "Category updated"
        );

        Ok(category)
    }
}
