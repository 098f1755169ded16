//! Create Category Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Category;
use crate::domain::hierarchy::derive_ancestry;
use crate::domain::repository::CategoryRepository;
use crate::domain::value_objects::CategoryName;
use crate::error::{CatalogError, CatalogResult};

/// Shape-validated category input, shared by create and update.
///
/// `ancestors` and `level` are the caller-asserted derived fields; the use
/// case recomputes both from the parent chain and rejects disagreement.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: CategoryName,
    pub parent_id: Option<Uuid>,
    pub ancestors: Option<Vec<Uuid>>,
    pub level: Option<i16>,
}

/// Create Category Use Case
pub struct CreateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> CreateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, input: CategoryInput) -> CatalogResult<Category> {
        // Resolve the parent before touching derived fields
        let parent = match input.parent_id {
            Some(parent_id) => Some(
                self.category_repo
                    .find_by_id(parent_id)
                    .await?
                    .ok_or(CatalogError::ParentNotFound)?,
            ),
            None => None,
        };

        // Server-side derivation is authoritative; submitted values are
        // verified, never stored
        let ancestry = derive_ancestry(parent.as_ref())?;
        ancestry.verify_submitted(input.ancestors.as_deref(), input.level)?;

        let category = Category::new(input.name, input.parent_id, ancestry);

        self.category_repo.create(&category).await?;

        tracing::info!(
            category_id = %category.id,
            level = category.level,
            "Category created"
        );

        Ok(category)
    }
}
