//! List Products Use Case

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repository::{Page, ProductFilter, ProductRepository};
use crate::domain::value_objects::{PageParams, SortSpec};
use crate::error::CatalogResult;

/// List Products Use Case
pub struct ListProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(
        &self,
        filter: ProductFilter,
        params: PageParams,
        sort: SortSpec,
    ) -> CatalogResult<Page<Product>> {
        self.product_repo.list(&filter, &params, &sort).await
    }
}
