use std::collections::HashSet;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("catalog.read_error")]
    Read(#[from] std::io::Error),
    #[error("catalog.parse_error")]
    Parse(#[from] serde_json::Error),
    #[error("catalog.duplicate_product: {0}")]
    Duplicate(String),
}

/// Read-only catalog held in memory, loaded once at startup.
pub struct StaticCatalogRepository {
    products: Vec<Product>,
}

impl StaticCatalogRepository {
    /// Catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogLoadError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Product ids and slugs must be unique.
    pub fn from_json(content: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(content)?;

        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for product in &products {
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogLoadError::Duplicate(product.id.clone()));
            }
            if !slugs.insert(product.slug.as_str()) {
                return Err(CatalogLoadError::Duplicate(product.slug.clone()));
            }
        }

        Ok(Self { products })
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn should_load_builtin_catalog() {
        let catalog = StaticCatalogRepository::builtin().unwrap();

        assert!(!catalog.is_empty());
    }

    #[tokio::test]
    async fn should_find_builtin_product_with_variants_by_slug() {
        let catalog = StaticCatalogRepository::builtin().unwrap();

        let product = catalog.get_by_slug("airpods-max").await.unwrap();

        assert_eq!(product.name, "AirPods Max");
        assert!(product.variant("silver").is_some());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let catalog = StaticCatalogRepository::builtin().unwrap();

        let result = catalog.get_by_id("walkman").await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let json = r#"[
            {"id": "a", "slug": "a", "name": "A", "price": 1},
            {"id": "a", "slug": "b", "name": "B", "price": 2}
        ]"#;

        let result = StaticCatalogRepository::from_json(json);

        assert!(matches!(result, Err(CatalogLoadError::Duplicate(id)) if id == "a"));
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = StaticCatalogRepository::from_json("{not json");

        assert!(matches!(result, Err(CatalogLoadError::Parse(_))));
    }

    #[tokio::test]
    async fn should_load_catalog_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id": "x1", "slug": "x-one", "name": "X One", "price": 12.5}]"#,
        )
        .unwrap();

        let catalog = StaticCatalogRepository::from_path(&path).unwrap();
        let product = catalog.get_by_id("x1").await.unwrap();

        assert_eq!(product.slug, "x-one");
        assert_eq!(product.price, 12.5);
        assert!(product.variants.is_empty());
    }
}
