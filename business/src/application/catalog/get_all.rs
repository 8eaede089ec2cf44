use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use crate::domain::logger::Logger;

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Fetching catalog products");
        let products: Vec<Product> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(|p| !params.featured_only || p.is_featured)
            .collect();
        self.logger
            .info(&format!("Found {} catalog products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockCatalogRepo, earbuds, headphones, mock_logger};

    #[tokio::test]
    async fn should_return_all_products_when_not_filtering() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![earbuds(), headphones()]));
        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsParams {
                featured_only: false,
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_only_featured_products_when_requested() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![earbuds(), headphones()]));
        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsParams {
                featured_only: true,
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "airpods-pro-2");
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_all()
            .returning(|| Err(RepositoryError::Persistence));
        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsParams {
                featured_only: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::Repository(_)));
    }
}
