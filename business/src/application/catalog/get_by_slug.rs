use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_by_slug::{
    GetProductBySlugParams, GetProductBySlugUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProductBySlugUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductBySlugUseCase for GetProductBySlugUseCaseImpl {
    async fn execute(&self, params: GetProductBySlugParams) -> Result<Product, CatalogError> {
        self.logger
            .info(&format!("Fetching product by slug: {}", params.slug));
        self.repository
            .get_by_slug(&params.slug)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => CatalogError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCatalogRepo, headphones, mock_logger};

    #[tokio::test]
    async fn should_return_product_when_slug_exists() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_slug().returning(|_| Ok(headphones()));
        let use_case = GetProductBySlugUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductBySlugParams {
                slug: "airpods-max".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "AirPods Max");
    }

    #[tokio::test]
    async fn should_return_not_found_when_slug_unknown() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_slug()
            .returning(|_| Err(RepositoryError::NotFound));
        let use_case = GetProductBySlugUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductBySlugParams {
                slug: "nope".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }
}
