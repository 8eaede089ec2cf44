use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::cart::model::{Cart, LineItem, LineKey};
use crate::domain::cart::snapshot::{deserialize_cart, serialize_cart};
use crate::domain::cart::storage::{CART_STORAGE_KEY, CartStorage};
use crate::domain::catalog::model::{Product, Variant};
use crate::domain::logger::Logger;

/// Single source of truth for the shopper's selections.
///
/// Owned explicitly and injected where needed. Every mutation is written to
/// durable storage before it returns; storage failures are logged and
/// swallowed so the in-memory cart keeps working.
pub struct CartStore {
    cart: RwLock<Cart>,
    storage: Arc<dyn CartStorage>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Rehydrates the cart from storage. Absent, unreadable or malformed
    /// content yields an empty cart.
    pub fn load(storage: Arc<dyn CartStorage>, logger: Arc<dyn Logger>) -> Self {
        let cart = match storage.read(CART_STORAGE_KEY) {
            Ok(Some(raw)) => deserialize_cart(&raw),
            Ok(None) => Cart::new(),
            Err(err) => {
                logger.warn(&format!("Cart storage unreadable, starting empty: {}", err));
                Cart::new()
            }
        };

        logger.info(&format!(
            "Cart loaded with {} line(s), {} item(s)",
            cart.lines().len(),
            cart.total_items()
        ));

        Self {
            cart: RwLock::new(cart),
            storage,
            logger,
        }
    }

    pub fn add_to_cart(
        &self,
        product: &Product,
        variant: Option<&Variant>,
        quantity: u32,
    ) -> LineItem {
        let mut cart = self.write();
        let line = cart.add(product, variant, quantity).clone();
        self.logger.debug(&format!(
            "Added {} x {} (now {})",
            quantity.max(1),
            line.key(),
            line.quantity
        ));
        self.persist(&cart);
        line
    }

    /// No-op when the key is not in the cart.
    pub fn remove_from_cart(&self, key: &LineKey) {
        let mut cart = self.write();
        if cart.remove(key) {
            self.logger.debug(&format!("Removed {}", key));
            self.persist(&cart);
        }
    }

    /// Quantities of zero or less remove the line. No-op on unknown keys.
    pub fn set_quantity(&self, key: &LineKey, quantity: i64) {
        let mut cart = self.write();
        if cart.set_quantity(key, quantity) {
            self.logger
                .debug(&format!("Set quantity of {} to {}", key, quantity));
            self.persist(&cart);
        }
    }

    pub fn clear_cart(&self) {
        let mut cart = self.write();
        cart.clear();
        self.logger.info("Cart cleared");
        self.persist(&cart);
    }

    pub fn total_items(&self) -> u64 {
        self.read().total_items()
    }

    pub fn subtotal(&self) -> f64 {
        self.read().subtotal()
    }

    pub fn lines(&self) -> Vec<LineItem> {
        self.read().lines().to_vec()
    }

    /// Point-in-time copy of the cart.
    pub fn snapshot(&self) -> Cart {
        self.read().clone()
    }

    fn persist(&self, cart: &Cart) {
        let result = serialize_cart(cart)
            .map_err(|err| err.to_string())
            .and_then(|raw| {
                self.storage
                    .write(CART_STORAGE_KEY, &raw)
                    .map_err(|err| err.to_string())
            });

        if let Err(err) = result {
            self.logger
                .warn(&format!("Cart not persisted, continuing in memory: {}", err));
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }
}
