//! Get Category Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult};

/// Get Category Use Case
///
/// Also serves as the lookup interface the product collaborator uses to
/// snapshot ancestor chains at product write time.
pub struct GetCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> GetCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: Uuid) -> CatalogResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)
    }
}
