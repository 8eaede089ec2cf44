use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockRecord;
use crate::domain::stock::repository::StockRepository;
use crate::domain::stock::use_cases::save_levels::{
    SaveStockLevelsParams, SaveStockLevelsUseCase,
};

pub struct SaveStockLevelsUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveStockLevelsUseCase for SaveStockLevelsUseCaseImpl {
    async fn execute(&self, params: SaveStockLevelsParams) -> Result<usize, StockError> {
        let known: HashSet<String> = self
            .catalog
            .get_all()
            .await?
            .into_iter()
            .map(|product| product.id)
            .collect();

        let now = Utc::now();
        let records: Vec<StockRecord> = params
            .levels
            .into_iter()
            .filter(|level| {
                let keep = known.contains(&level.product_id);
                if !keep {
                    self.logger.warn(&format!(
                        "Skipping stock level for unknown product {}",
                        level.product_id
                    ));
                }
                keep
            })
            .map(|level| StockRecord {
                level: level.clamped(),
                updated_at: now,
            })
            .collect();

        if records.is_empty() {
            return Ok(0);
        }

        self.repository.upsert(&records).await.map_err(|err| {
            self.logger
                .error(&format!("Failed to save stock levels: {}", err));
            StockError::SaveFailed
        })?;

        self.logger
            .info(&format!("Saved {} stock level(s)", records.len()));
        Ok(records.len())
    }
}
