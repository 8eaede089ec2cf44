use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct GetProductBySlugParams {
    pub slug: String,
}

#[async_trait]
pub trait GetProductBySlugUseCase: Send + Sync {
    async fn execute(&self, params: GetProductBySlugParams) -> Result<Product, CatalogError>;
}
