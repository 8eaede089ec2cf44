//! Serialized form of the cart and the tolerant rehydration applied when
//! reading it back.
//!
//! Every stored record goes through [`coerce_record`], so lines loaded from
//! storage are always well-formed:
//!
//! | field | rule |
//! |---|---|
//! | `productId` (or legacy `id`) | trimmed non-empty string, else a fresh UUID |
//! | `name` (or `title`, `productName`) | trimmed non-empty string, else `"Item"` |
//! | `price` | finite non-negative number, or a numeric string with currency symbols stripped, else `0` |
//! | `quantity` | number or numeric string, floored, at least `1`, else `1` |
//! | `variantSlug`, `variantName`, `image`, `slug` | kept only when strings |
//!
//! Unknown fields are dropped.

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::model::{Cart, LineItem};
use crate::domain::shared::money::sanitize_price;

const DEFAULT_NAME: &str = "Item";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredLineItem<'a> {
    product_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant_slug: Option<&'a str>,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant_name: Option<&'a str>,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a str>,
    quantity: u32,
}

impl<'a> From<&'a LineItem> for StoredLineItem<'a> {
    fn from(line: &'a LineItem) -> Self {
        Self {
            product_id: &line.product_id,
            variant_slug: line.variant_slug.as_deref(),
            name: &line.name,
            variant_name: line.variant_name.as_deref(),
            price: sanitize_price(line.price),
            image: line.image.as_deref(),
            slug: line.slug.as_deref(),
            quantity: line.quantity,
        }
    }
}

/// Serializes the cart as a JSON array of line records.
pub fn serialize_cart(cart: &Cart) -> Result<String, serde_json::Error> {
    let records: Vec<StoredLineItem<'_>> = cart.lines().iter().map(StoredLineItem::from).collect();
    serde_json::to_string(&records)
}

/// Rebuilds a cart from stored content. Never fails: malformed content yields
/// an empty cart, and malformed records are repaired.
pub fn deserialize_cart(raw: &str) -> Cart {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return Cart::new(),
    };

    match parsed {
        Value::Array(records) => Cart::from_lines(
            records
                .iter()
                .filter_map(Value::as_object)
                .map(coerce_record),
        ),
        _ => Cart::new(),
    }
}

/// Coerces one stored record into a well-formed line.
pub fn coerce_record(record: &Map<String, Value>) -> LineItem {
    let product_id = text(record, &["productId", "id"])
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let name = text(record, &["name", "title", "productName"])
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    LineItem {
        product_id,
        variant_slug: text(record, &["variantSlug"]),
        name,
        variant_name: text(record, &["variantName"]),
        price: record.get("price").map(coerce_price).unwrap_or(0.0),
        image: raw_string(record, "image"),
        slug: raw_string(record, "slug"),
        quantity: record.get("quantity").map(coerce_quantity).unwrap_or(1),
    }
}

/// Accepts `15`, `"15"`, `"£15"`, `"£15.00"`; anything else is `0`.
fn coerce_price(value: &Value) -> f64 {
    let price = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    };
    sanitize_price(price)
}

fn coerce_quantity(value: &Value) -> u32 {
    let quantity = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match quantity {
        Some(q) if q.is_finite() && q >= 1.0 => {
            if q >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                q.floor() as u32
            }
        }
        _ => 1,
    }
}

fn text(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| {
        record
            .get(*field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn raw_string(record: &Map<String, Value>, field: &str) -> Option<String> {
    record.get(field).and_then(Value::as_str).map(str::to_string)
}
