use poem_openapi::Object;

use business::domain::catalog::model::{Product, Variant};

#[derive(Debug, Clone, Object)]
pub struct VariantResponse {
    pub slug: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Overrides the product price when present
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
}

impl From<Variant> for VariantResponse {
    fn from(variant: Variant) -> Self {
        Self {
            slug: variant.slug,
            name: variant.name,
            image: variant.image,
            price: variant.price,
            original_price: variant.original_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    /// Price in GBP, major units
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    pub images: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub is_featured: bool,
    pub variants: Vec<VariantResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            slug: product.slug,
            name: product.name,
            description: product.description,
            features: product.features,
            price: product.price,
            original_price: product.original_price,
            badge: product.badge,
            images: product.images,
            category: product.category,
            is_featured: product.is_featured,
            variants: product.variants.into_iter().map(Into::into).collect(),
        }
    }
}
