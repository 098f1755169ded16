//! List Categories Use Case

use std::sync::Arc;

use crate::domain::entities::Category;
use crate::domain::repository::{CategoryFilter, CategoryRepository, Page};
use crate::domain::value_objects::{PageParams, SortSpec};
use crate::error::CatalogResult;

/// List Categories Use Case
///
/// Snapshot-less read: concurrent writes may or may not be visible.
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(
        &self,
        filter: CategoryFilter,
        params: PageParams,
        sort: SortSpec,
    ) -> CatalogResult<Page<Category>> {
        self.category_repo.list(&filter, &params, &sort).await
    }
}
