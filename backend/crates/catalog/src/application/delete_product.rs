//! Delete Product Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Delete Product Use Case
pub struct DeleteProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> DeleteProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, id: Uuid) -> CatalogResult<Product> {
        let deleted = self
            .product_repo
            .delete(id)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

        tracing::info!(product_id = %deleted.id, "Product deleted");

        Ok(deleted)
    }
}
