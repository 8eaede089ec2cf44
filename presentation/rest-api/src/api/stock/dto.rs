use poem_openapi::Object;

use business::domain::stock::model::{StockEntry, StockLevel, StockSheet};

#[derive(Debug, Clone, Object)]
pub struct StockEntryResponse {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
}

impl From<StockEntry> for StockEntryResponse {
    fn from(entry: StockEntry) -> Self {
        Self {
            product_id: entry.product_id,
            product_name: entry.product_name,
            quantity: entry.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StockSheetResponse {
    /// One entry per catalog product, sorted by name
    pub entries: Vec<StockEntryResponse>,
    /// Set when stored levels could not be loaded and defaults are shown
    #[oai(skip_serializing_if_is_none)]
    pub banner: Option<String>,
}

impl From<StockSheet> for StockSheetResponse {
    fn from(sheet: StockSheet) -> Self {
        Self {
            entries: sheet.entries.into_iter().map(Into::into).collect(),
            banner: sheet.banner,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StockLevelRequest {
    pub product_id: String,
    /// Negative values are saved as zero
    pub quantity: i64,
}

impl From<StockLevelRequest> for StockLevel {
    fn from(request: StockLevelRequest) -> Self {
        StockLevel::new(request.product_id, request.quantity)
    }
}

#[derive(Debug, Clone, Object)]
pub struct SaveStockRequest {
    pub levels: Vec<StockLevelRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct SaveStockResponse {
    /// Number of levels written
    pub saved: u64,
}
