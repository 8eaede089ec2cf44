use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::{StockEntry, StockSheet};
use crate::domain::stock::repository::StockRepository;
use crate::domain::stock::use_cases::get_sheet::GetStockSheetUseCase;

pub const LOAD_FAILED_BANNER: &str = "Could not load stock levels. Showing defaults.";

pub struct GetStockSheetUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStockSheetUseCase for GetStockSheetUseCaseImpl {
    async fn execute(&self) -> Result<StockSheet, StockError> {
        let mut products = self.catalog.get_all().await?;
        products.sort_by(|a, b| a.name.cmp(&b.name));

        let (levels, banner) = match self.repository.fetch_all().await {
            Ok(levels) => (
                levels
                    .into_iter()
                    .map(|level| (level.product_id, level.quantity))
                    .collect::<HashMap<_, _>>(),
                None,
            ),
            Err(err) => {
                self.logger
                    .error(&format!("Failed to load stock levels: {}", err));
                (HashMap::new(), Some(LOAD_FAILED_BANNER.to_string()))
            }
        };

        let entries = products
            .into_iter()
            .map(|product| StockEntry {
                quantity: levels.get(&product.id).copied().unwrap_or(0),
                product_id: product.id,
                product_name: product.name,
            })
            .collect();

        Ok(StockSheet { entries, banner })
    }
}
