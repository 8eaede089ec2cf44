use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{StockLevel, StockRecord};

/// External key-value store of product id to stock quantity.
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<StockLevel>, RepositoryError>;
    /// Inserts or replaces each record keyed by product id. Writing the same
    /// records twice leaves the store unchanged.
    async fn upsert(&self, records: &[StockRecord]) -> Result<(), RepositoryError>;
}
