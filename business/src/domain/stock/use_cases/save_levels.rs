use async_trait::async_trait;

use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockLevel;

pub struct SaveStockLevelsParams {
    pub levels: Vec<StockLevel>,
}

#[async_trait]
pub trait SaveStockLevelsUseCase: Send + Sync {
    /// Returns the number of levels written.
    async fn execute(&self, params: SaveStockLevelsParams) -> Result<usize, StockError>;
}
