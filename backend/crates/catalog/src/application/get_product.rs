//! Get Product Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Get Product Use Case
pub struct GetProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> GetProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, id: Uuid) -> CatalogResult<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound)
    }
}
