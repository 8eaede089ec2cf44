use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItem;

pub struct AddToCartParams {
    pub product_id: String,
    pub variant_slug: Option<String>,
    pub quantity: Option<u32>,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<LineItem, CartError>;
}
