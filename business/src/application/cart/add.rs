use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItem;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<LineItem, CartError> {
        self.logger
            .info(&format!("Adding product to cart: {}", params.product_id));

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        // Products with variants default to the first one, as the product page does.
        let variant = match params.variant_slug.as_deref() {
            Some(slug) => Some(product.variant(slug).ok_or(CartError::VariantNotFound)?),
            None => product.variants.first(),
        };

        let line = self
            .cart
            .add_to_cart(&product, variant, params.quantity.unwrap_or(1));

        self.logger.info(&format!(
            "Cart line {} now has quantity {}",
            line.key(),
            line.quantity
        ));
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryStorage, MockCatalogRepo, earbuds, headphones, mock_logger};

    fn use_case(catalog: MockCatalogRepo) -> (AddToCartUseCaseImpl, Arc<CartStore>) {
        let cart = Arc::new(CartStore::load(
            Arc::new(MemoryStorage::default()),
            mock_logger(),
        ));
        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog),
            cart: cart.clone(),
            logger: mock_logger(),
        };
        (use_case, cart)
    }

    fn params(product_id: &str, variant_slug: Option<&str>, quantity: Option<u32>) -> AddToCartParams {
        AddToCartParams {
            product_id: product_id.to_string(),
            variant_slug: variant_slug.map(str::to_string),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_add_catalog_product_with_default_quantity() {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|_| Ok(earbuds()));
        let (use_case, cart) = use_case(catalog);

        let line = use_case
            .execute(params("airpods-pro-2", None, None))
            .await
            .unwrap();

        assert_eq!(line.quantity, 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test]
    async fn should_merge_repeated_adds_of_same_variant() {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|_| Ok(headphones()));
        let (use_case, cart) = use_case(catalog);

        use_case
            .execute(params("airpods-max", Some("silver"), Some(2)))
            .await
            .unwrap();
        let line = use_case
            .execute(params("airpods-max", Some("silver"), Some(3)))
            .await
            .unwrap();

        assert_eq!(line.quantity, 5);
        assert_eq!(cart.lines().len(), 1);
    }

    #[tokio::test]
    async fn should_default_to_first_variant_when_none_selected() {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|_| Ok(headphones()));
        let (use_case, _cart) = use_case(catalog);

        let line = use_case
            .execute(params("airpods-max", None, None))
            .await
            .unwrap();

        assert_eq!(line.variant_slug.as_deref(), Some("silver"));
        assert_eq!(line.price, 30.0);
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_catalog_has_no_match() {
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let (use_case, cart) = use_case(catalog);

        let result = use_case.execute(params("missing", None, None)).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
        assert!(cart.lines().is_empty());
    }

    #[tokio::test]
    async fn should_reject_unknown_variant() {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|_| Ok(headphones()));
        let (use_case, cart) = use_case(catalog);

        let result = use_case
            .execute(params("airpods-max", Some("gold"), None))
            .await;

        assert!(matches!(result.unwrap_err(), CartError::VariantNotFound));
        assert!(cart.lines().is_empty());
    }
}
