use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Product catalog browsing
    Catalog,
    /// Shopper cart
    Cart,
    /// Checkout session and return handling
    Checkout,
    /// Admin stock levels
    Stock,
}
