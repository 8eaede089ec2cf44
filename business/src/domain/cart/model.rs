use std::fmt;

use crate::domain::catalog::model::{Product, Variant};
use crate::domain::shared::money::sanitize_price;

/// Merge identity of a cart line: the product plus the selected variant, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    product_id: String,
    variant_slug: Option<String>,
}

impl LineKey {
    pub fn new(product_id: impl Into<String>, variant_slug: Option<&str>) -> Self {
        Self {
            product_id: product_id.into(),
            variant_slug: variant_slug
                .filter(|slug| !slug.is_empty())
                .map(str::to_string),
        }
    }
}

/// Renders `productId` alone, or `productId-variantSlug` when a variant is selected.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant_slug {
            Some(slug) => write!(f, "{}-{}", self.product_id, slug),
            None => write!(f, "{}", self.product_id),
        }
    }
}

/// One entry in the cart. Product details are snapshotted when the line is added.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: String,
    pub variant_slug: Option<String>,
    pub name: String,
    pub variant_name: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub slug: Option<String>,
    pub quantity: u32,
}

impl LineItem {
    pub fn from_product(product: &Product, variant: Option<&Variant>, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            variant_slug: variant.map(|v| v.slug.clone()),
            name: product.name.clone(),
            variant_name: variant.map(|v| v.name.clone()),
            price: product.unit_price(variant),
            image: product.image_for(variant).map(str::to_string),
            slug: Some(product.slug.clone()),
            quantity: quantity.max(1),
        }
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.variant_slug.as_deref())
    }

    /// Product name, followed by the variant name in parentheses when one is selected.
    pub fn display_name(&self) -> String {
        match &self.variant_name {
            Some(variant) => format!("{} ({})", self.name, variant),
            None => self.name.clone(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Ordered collection of line items.
///
/// Holds two invariants at all times: no two lines share a [`LineKey`], and
/// every line has a quantity of at least one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from arbitrary lines, merging repeated keys and
    /// repairing quantities and prices.
    pub fn from_lines(lines: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.merge(line);
        }
        cart
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of the selection. An existing line with the same
    /// key has its quantity incremented and its snapshot refreshed.
    pub fn add(&mut self, product: &Product, variant: Option<&Variant>, quantity: u32) -> &LineItem {
        self.merge(LineItem::from_product(product, variant, quantity))
    }

    fn merge(&mut self, mut incoming: LineItem) -> &LineItem {
        incoming.quantity = incoming.quantity.max(1);
        incoming.price = sanitize_price(incoming.price);

        let key = incoming.key();
        match self.lines.iter().position(|line| line.key() == key) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(incoming.quantity);
                if !incoming.name.trim().is_empty() {
                    line.name = incoming.name;
                }
                if incoming.variant_name.is_some() {
                    line.variant_name = incoming.variant_name;
                }
                if incoming.image.is_some() {
                    line.image = incoming.image;
                }
                if incoming.slug.is_some() {
                    line.slug = incoming.slug;
                }
                if incoming.price > 0.0 {
                    line.price = incoming.price;
                }
                &self.lines[index]
            }
            None => {
                self.lines.push(incoming);
                let last = self.lines.len() - 1;
                &self.lines[last]
            }
        }
    }

    /// Returns `true` when a line was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key() != key);
        self.lines.len() != before
    }

    /// Sets the quantity of an existing line. Zero or negative quantities
    /// remove the line. Returns `true` when the cart changed.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(key);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX).max(1);
        match self.lines.iter_mut().find(|line| &line.key() == key) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` when there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        had_lines
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(LineItem::line_total).sum()
    }
}
