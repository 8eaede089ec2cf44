use async_trait::async_trait;

use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockSheet;

#[async_trait]
pub trait GetStockSheetUseCase: Send + Sync {
    async fn execute(&self) -> Result<StockSheet, StockError>;
}
