//! Shared mocks and fixtures for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::domain::cart::storage::{CartStorage, StorageError};
use crate::domain::catalog::model::{Product, Variant};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::checkout::errors::GatewayError;
use crate::domain::checkout::gateway::CheckoutGateway;
use crate::domain::checkout::model::{CheckoutRequest, CheckoutSession};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::stock::model::{StockLevel, StockRecord};
use crate::domain::stock::repository::StockRepository;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError>;
        async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub StockRepo {}

    #[async_trait]
    impl StockRepository for StockRepo {
        async fn fetch_all(&self) -> Result<Vec<StockLevel>, RepositoryError>;
        async fn upsert(&self, records: &[StockRecord]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Gateway {}

    #[async_trait]
    impl CheckoutGateway for Gateway {
        async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, GatewayError>;
    }
}

mock! {
    pub Storage {}

    impl CartStorage for Storage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
        fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Storage fake that keeps slots in memory so tests can inspect writes.
#[derive(Default)]
pub struct MemoryStorage {
    pub slots: Mutex<HashMap<String, String>>,
    pub writes: Mutex<usize>,
}

impl MemoryStorage {
    pub fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or_default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::WriteFailed)?;
        slots.insert(key.to_string(), value.to_string());
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}

pub fn earbuds() -> Product {
    Product {
        id: "airpods-pro-2".to_string(),
        slug: "airpods-pro-2".to_string(),
        name: "AirPods Pro 2".to_string(),
        price: 10.0,
        original_price: Some(249.0),
        images: vec!["https://example.com/airpods-pro-2.jpg".to_string()],
        description: "Premium in-ear wireless earbuds.".to_string(),
        features: vec!["ANC + Transparency".to_string()],
        badge: Some("New".to_string()),
        category: Some("earbuds".to_string()),
        is_featured: true,
        variants: vec![],
    }
}

pub fn headphones() -> Product {
    Product {
        id: "airpods-max".to_string(),
        slug: "airpods-max".to_string(),
        name: "AirPods Max".to_string(),
        price: 25.0,
        original_price: Some(549.0),
        images: vec!["/airpods-max-black.png".to_string()],
        description: "Over-ear headphones.".to_string(),
        features: vec![],
        badge: None,
        category: Some("headphones".to_string()),
        is_featured: false,
        variants: vec![
            Variant {
                slug: "silver".to_string(),
                name: "Silver".to_string(),
                image: Some("/airpods-max-silver.png".to_string()),
                price: Some(30.0),
                original_price: None,
            },
            Variant {
                slug: "black".to_string(),
                name: "Black".to_string(),
                image: None,
                price: None,
                original_price: None,
            },
        ],
    }
}
