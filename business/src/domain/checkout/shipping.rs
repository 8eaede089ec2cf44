use crate::domain::cart::model::Cart;

/// Flat shipping fee in pounds charged on every order.
pub const DEFAULT_SHIPPING_FEE: f64 = 5.0;

/// Computes the shipping fee, in major units, for a cart.
pub trait ShippingRateProvider: Send + Sync {
    fn shipping_fee(&self, cart: &Cart) -> f64;
}

/// Same fee regardless of cart contents.
#[derive(Debug, Clone, Copy)]
pub struct FlatShippingRate {
    fee: f64,
}

impl FlatShippingRate {
    pub fn new(fee: f64) -> Self {
        Self { fee }
    }
}

impl Default for FlatShippingRate {
    fn default() -> Self {
        Self::new(DEFAULT_SHIPPING_FEE)
    }
}

impl ShippingRateProvider for FlatShippingRate {
    fn shipping_fee(&self, _cart: &Cart) -> f64 {
        self.fee
    }
}
