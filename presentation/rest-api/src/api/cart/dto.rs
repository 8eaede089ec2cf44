use poem_openapi::Object;

use business::domain::cart::model::{Cart, LineItem};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: String,
    /// Defaults to the product's first variant, if it has any
    #[oai(skip_serializing_if_is_none)]
    pub variant_slug: Option<String>,
    /// Defaults to 1
    #[oai(skip_serializing_if_is_none, validator(minimum(value = "1")))]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// Zero or less removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Rendered line identity, for display only
    pub key: String,
    pub product_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub variant_slug: Option<String>,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub variant_name: Option<String>,
    pub display_name: String,
    pub price: f64,
    pub quantity: u32,
    pub line_total: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
}

impl From<&LineItem> for CartLineResponse {
    fn from(line: &LineItem) -> Self {
        Self {
            key: line.key().to_string(),
            product_id: line.product_id.clone(),
            variant_slug: line.variant_slug.clone(),
            name: line.name.clone(),
            variant_name: line.variant_name.clone(),
            display_name: line.display_name(),
            price: line.price,
            quantity: line.quantity,
            line_total: line.line_total(),
            image: line.image.clone(),
            slug: line.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total_items: u64,
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub total: f64,
}

impl CartResponse {
    /// Shipping is only charged on a non-empty cart.
    pub fn from_cart(cart: &Cart, shipping_fee: f64) -> Self {
        let shipping_fee = if cart.is_empty() { 0.0 } else { shipping_fee };
        let subtotal = cart.subtotal();
        Self {
            lines: cart.lines().iter().map(Into::into).collect(),
            total_items: cart.total_items(),
            subtotal,
            shipping_fee,
            total: subtotal + shipping_fee,
        }
    }
}
