use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct GetProductsParams {
    pub featured_only: bool,
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, CatalogError>;
}
