use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
}
