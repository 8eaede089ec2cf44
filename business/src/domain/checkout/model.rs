use serde::Serialize;
use strum_macros::Display;

use super::errors::CheckoutError;
use super::value_objects::{ContactEmail, ReturnOrigin};
use crate::domain::cart::model::LineItem;
use crate::domain::shared::money::{from_minor_units, to_minor_units};

pub const SHIPPING_LINE_NAME: &str = "Shipping";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutLineKind {
    Product,
    Shipping,
}

/// One charge line sent to the payment collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLine {
    pub name: String,
    pub unit_amount: i64,
    pub quantity: u32,
    pub image: Option<String>,
    pub kind: CheckoutLineKind,
}

impl CheckoutLine {
    pub fn amount(&self) -> i64 {
        self.unit_amount.saturating_mul(i64::from(self.quantity))
    }
}

/// One-time projection of the cart sent to the payment collaborator.
/// Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub lines: Vec<CheckoutLine>,
    pub customer_email: ContactEmail,
    pub origin: ReturnOrigin,
}

impl CheckoutRequest {
    /// Converts cart lines into charge lines, appending a shipping pseudo-line
    /// when `shipping_fee` is positive.
    ///
    /// The whole request is rejected when any amount is non-finite or negative,
    /// or when the total no longer fits in minor units.
    pub fn build(
        items: &[LineItem],
        shipping_fee: f64,
        customer_email: ContactEmail,
        origin: ReturnOrigin,
    ) -> Result<Self, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut lines = items
            .iter()
            .map(|item| {
                let unit_amount =
                    to_minor_units(item.price).ok_or_else(|| CheckoutError::InvalidPrice {
                        item: item.display_name(),
                    })?;
                Ok(CheckoutLine {
                    name: item.display_name(),
                    unit_amount,
                    quantity: item.quantity.max(1),
                    image: item.image.clone(),
                    kind: CheckoutLineKind::Product,
                })
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;

        if shipping_fee.is_nan() || shipping_fee.is_infinite() {
            return Err(CheckoutError::InvalidShippingFee);
        }
        if shipping_fee > 0.0 {
            let unit_amount =
                to_minor_units(shipping_fee).ok_or(CheckoutError::InvalidShippingFee)?;
            lines.push(CheckoutLine {
                name: SHIPPING_LINE_NAME.to_string(),
                unit_amount,
                quantity: 1,
                image: None,
                kind: CheckoutLineKind::Shipping,
            });
        }

        lines.iter().try_fold(0i64, |total, line| {
            line.unit_amount
                .checked_mul(i64::from(line.quantity))
                .and_then(|amount| total.checked_add(amount))
                .ok_or(CheckoutError::AmountTooLarge)
        })?;

        Ok(Self {
            lines,
            customer_email,
            origin,
        })
    }

    pub fn shipping_line(&self) -> Option<&CheckoutLine> {
        self.lines
            .iter()
            .find(|line| line.kind == CheckoutLineKind::Shipping)
    }

    /// Saturates instead of overflowing; `build` already rejects totals that
    /// do not fit.
    pub fn total_minor_units(&self) -> i64 {
        self.lines
            .iter()
            .map(CheckoutLine::amount)
            .fold(0, i64::saturating_add)
    }

    /// Total in major units, shipping included.
    pub fn total(&self) -> f64 {
        from_minor_units(self.total_minor_units())
    }
}

/// Session created by the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub redirect_url: String,
}

/// Checkout lifecycle as seen by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CheckoutState {
    Idle,
    Submitting,
    /// A session was created and the shopper was sent to the payment page.
    Redirected { redirect_url: String },
    Failed { message: String },
    Completed,
}

/// Indicator carried back on the return trip from the payment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ReturnSignal {
    Success,
    Canceled,
    Absent,
}

impl ReturnSignal {
    /// Reads the `success` / `canceled` return parameters. A flag counts only
    /// when it is `true` (any case). Success wins when both are present.
    pub fn from_flags(success: Option<&str>, canceled: Option<&str>) -> Self {
        let enabled = |value: Option<&str>| value.is_some_and(|v| v.eq_ignore_ascii_case("true"));
        if enabled(success) {
            ReturnSignal::Success
        } else if enabled(canceled) {
            ReturnSignal::Canceled
        } else {
            ReturnSignal::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: f64, quantity: u32) -> LineItem {
        LineItem {
            product_id: name.to_lowercase(),
            variant_slug: None,
            name: name.to_string(),
            variant_name: None,
            price,
            image: None,
            slug: None,
            quantity,
        }
    }

    fn email() -> ContactEmail {
        ContactEmail::parse("shopper@example.com").unwrap()
    }

    #[test]
    fn should_convert_lines_to_minor_units_and_add_shipping() {
        let items = vec![line("A", 10.0, 2), line("B", 15.5, 1)];

        let request =
            CheckoutRequest::build(&items, 5.0, email(), ReturnOrigin::fallback()).unwrap();

        let amounts: Vec<i64> = request.lines.iter().map(|l| l.unit_amount).collect();
        assert_eq!(amounts, vec![1000, 1550, 500]);
        assert_eq!(request.lines[0].quantity, 2);
        assert_eq!(request.shipping_line().map(|l| l.unit_amount), Some(500));
        assert_eq!(request.total(), 10.0 * 2.0 + 15.5 + 5.0);
        assert_eq!(request.total_minor_units(), 4050);
    }

    #[test]
    fn should_omit_shipping_line_when_fee_is_zero() {
        let items = vec![line("A", 10.0, 1)];

        let request =
            CheckoutRequest::build(&items, 0.0, email(), ReturnOrigin::fallback()).unwrap();

        assert!(request.shipping_line().is_none());
        assert_eq!(request.lines.len(), 1);
    }

    #[test]
    fn should_include_variant_name_in_line_name() {
        let mut item = line("AirPods Max", 25.0, 1);
        item.variant_slug = Some("silver".to_string());
        item.variant_name = Some("Silver".to_string());

        let request =
            CheckoutRequest::build(&[item], 0.0, email(), ReturnOrigin::fallback()).unwrap();

        assert_eq!(request.lines[0].name, "AirPods Max (Silver)");
    }

    #[test]
    fn should_reject_whole_request_when_any_price_is_invalid() {
        let items = vec![line("A", 10.0, 1), line("Broken", f64::NAN, 1)];

        let result = CheckoutRequest::build(&items, 5.0, email(), ReturnOrigin::fallback());

        assert_eq!(
            result.unwrap_err(),
            CheckoutError::InvalidPrice {
                item: "Broken".to_string()
            }
        );
    }

    #[test]
    fn should_reject_negative_price() {
        let items = vec![line("A", -1.0, 1)];

        let result = CheckoutRequest::build(&items, 0.0, email(), ReturnOrigin::fallback());

        assert!(matches!(result, Err(CheckoutError::InvalidPrice { .. })));
    }

    #[test]
    fn should_reject_non_finite_shipping_fee() {
        let items = vec![line("A", 1.0, 1)];

        let result =
            CheckoutRequest::build(&items, f64::INFINITY, email(), ReturnOrigin::fallback());

        assert_eq!(result.unwrap_err(), CheckoutError::InvalidShippingFee);
    }

    #[test]
    fn should_reject_total_that_overflows_minor_units() {
        let items = vec![line("A", 5e16, 1), line("B", 5e16, 1)];

        let result = CheckoutRequest::build(&items, 5.0, email(), ReturnOrigin::fallback());

        assert_eq!(result.unwrap_err(), CheckoutError::AmountTooLarge);
    }

    #[test]
    fn should_reject_line_amount_that_overflows_minor_units() {
        let items = vec![line("A", 5e16, 3)];

        let result = CheckoutRequest::build(&items, 0.0, email(), ReturnOrigin::fallback());

        assert_eq!(result.unwrap_err(), CheckoutError::AmountTooLarge);
    }

    #[test]
    fn should_reject_empty_cart() {
        let result = CheckoutRequest::build(&[], 5.0, email(), ReturnOrigin::fallback());

        assert_eq!(result.unwrap_err(), CheckoutError::EmptyCart);
    }

    #[test]
    fn should_prefer_success_flag_over_canceled_flag() {
        assert_eq!(
            ReturnSignal::from_flags(Some("TRUE"), Some("true")),
            ReturnSignal::Success
        );
        assert_eq!(
            ReturnSignal::from_flags(Some("no"), Some("true")),
            ReturnSignal::Canceled
        );
        assert_eq!(
            ReturnSignal::from_flags(Some("false"), None),
            ReturnSignal::Absent
        );
        assert_eq!(ReturnSignal::from_flags(None, None), ReturnSignal::Absent);
    }

    #[test]
    fn should_display_states_in_snake_case() {
        assert_eq!(CheckoutState::Idle.to_string(), "idle");
        assert_eq!(
            CheckoutState::Failed {
                message: "boom".to_string()
            }
            .to_string(),
            "failed"
        );
    }
}
