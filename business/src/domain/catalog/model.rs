use serde::{Deserialize, Serialize};

use crate::domain::shared::money::sanitize_price;

/// A named sub-selection of a product, e.g. a colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Overrides the parent product price when present.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
}

/// A catalog entry. Immutable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Primary image reference.
    pub fn image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn variant(&self, slug: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.slug == slug)
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Unit price for the given selection, sanitized so it is always a
    /// finite, non-negative amount.
    pub fn unit_price(&self, variant: Option<&Variant>) -> f64 {
        let price = variant.and_then(|v| v.price).unwrap_or(self.price);
        sanitize_price(price)
    }

    /// Image for the given selection, falling back to the product image.
    pub fn image_for<'a>(&'a self, variant: Option<&'a Variant>) -> Option<&'a str> {
        variant
            .and_then(|v| v.image.as_deref())
            .or_else(|| self.image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product {
            id: "airpods-max".to_string(),
            slug: "airpods-max".to_string(),
            name: "AirPods Max".to_string(),
            price: 25.0,
            original_price: Some(549.0),
            images: vec!["/airpods-max-black.png".to_string()],
            description: String::new(),
            features: vec![],
            badge: None,
            category: Some("headphones".to_string()),
            is_featured: true,
            variants: vec![
                Variant {
                    slug: "silver".to_string(),
                    name: "Silver".to_string(),
                    image: Some("/airpods-max-silver.png".to_string()),
                    price: Some(30.0),
                    original_price: None,
                },
                Variant {
                    slug: "black".to_string(),
                    name: "Black".to_string(),
                    image: None,
                    price: None,
                    original_price: None,
                },
            ],
        }
    }

    #[test]
    fn should_use_variant_price_override_when_present() {
        let product = headphones();
        let silver = product.variant("silver");

        assert_eq!(product.unit_price(silver), 30.0);
    }

    #[test]
    fn should_fall_back_to_product_price_when_variant_has_none() {
        let product = headphones();
        let black = product.variant("black");

        assert_eq!(product.unit_price(black), 25.0);
        assert_eq!(product.unit_price(None), 25.0);
    }

    #[test]
    fn should_prefer_variant_image_over_product_image() {
        let product = headphones();

        assert_eq!(
            product.image_for(product.variant("silver")),
            Some("/airpods-max-silver.png")
        );
        assert_eq!(
            product.image_for(product.variant("black")),
            Some("/airpods-max-black.png")
        );
    }

    #[test]
    fn should_take_image_from_separately_owned_variant() {
        let product = headphones();
        let engraved = Variant {
            slug: "engraved".to_string(),
            name: "Engraved".to_string(),
            image: Some("/airpods-max-engraved.png".to_string()),
            price: None,
            original_price: None,
        };

        let image = product.image_for(Some(&engraved));

        assert_eq!(image, Some("/airpods-max-engraved.png"));
        assert_eq!(product.image_for(None), Some("/airpods-max-black.png"));
    }

    #[test]
    fn should_deserialize_from_camel_case_json() {
        let json = r#"{
            "id": "airpods-pro-2",
            "slug": "airpods-pro-2",
            "name": "AirPods Pro 2",
            "price": 10,
            "originalPrice": 249,
            "images": ["https://example.com/a.jpg"],
            "isFeatured": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.original_price, Some(249.0));
        assert!(product.is_featured);
        assert!(!product.has_variants());
    }
}
