use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::stock::model::StockLevel;

#[derive(Debug, FromRow)]
pub struct StockLevelEntity {
    pub product_id: String,
    pub quantity: i64,
    pub updated_at: DateTime<Utc>,
}

impl StockLevelEntity {
    pub fn into_domain(self) -> StockLevel {
        StockLevel::new(self.product_id, self.quantity)
    }
}
