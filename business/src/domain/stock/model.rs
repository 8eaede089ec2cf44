use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Units on hand for one catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: String,
    pub quantity: i64,
}

impl StockLevel {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Stock counts are never negative once saved.
    pub fn clamped(self) -> Self {
        Self {
            quantity: self.quantity.max(0),
            ..self
        }
    }
}

/// A stock level as written to the store, stamped with the save time.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    pub level: StockLevel,
    pub updated_at: DateTime<Utc>,
}

/// One row of the admin stock sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StockEntry {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
}

/// Admin view of stock: one entry per catalog product, plus a banner when
/// the stock store could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSheet {
    pub entries: Vec<StockEntry>,
    pub banner: Option<String>,
}
