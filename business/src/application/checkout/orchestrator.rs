use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::gateway::CheckoutGateway;
use crate::domain::checkout::model::{
    CheckoutRequest, CheckoutSession, CheckoutState, ReturnSignal,
};
use crate::domain::checkout::shipping::ShippingRateProvider;
use crate::domain::checkout::value_objects::{ContactEmail, ReturnOrigin};
use crate::domain::logger::Logger;
use crate::domain::shared::money::format_gbp;

/// Result of a submit attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A session was created; the shopper should be sent to the redirect URL.
    Redirect(CheckoutSession),
    /// Another submission was already in flight, so this one was dropped.
    Ignored,
}

/// What the storefront should show after inspecting the return indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// Payment confirmed. `cart_cleared` is `false` when the confirmation had
    /// already been handled.
    Completed { cart_cleared: bool },
    Canceled,
    NoSignal,
}

impl ReturnOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ReturnOutcome::Completed { .. } => "Thank you! Your order has been placed.",
            ReturnOutcome::Canceled => "Checkout was canceled. Your cart has been kept.",
            ReturnOutcome::NoSignal => "",
        }
    }
}

/// Turns a cart snapshot into exactly one checkout-session request and
/// tracks the resulting state.
///
/// ```text
/// Idle --submit--> Submitting --session--> Redirected --success--> Completed
///                      |                        |
///                      +--error--> Failed       +--canceled--> Idle
/// ```
///
/// The orchestrator only ever reads the cart, except to clear it once when a
/// success indicator is first observed.
pub struct CheckoutOrchestrator {
    cart: Arc<CartStore>,
    gateway: Arc<dyn CheckoutGateway>,
    shipping: Arc<dyn ShippingRateProvider>,
    origin: ReturnOrigin,
    logger: Arc<dyn Logger>,
    state: Mutex<CheckoutState>,
}

impl CheckoutOrchestrator {
    pub fn new(
        cart: Arc<CartStore>,
        gateway: Arc<dyn CheckoutGateway>,
        shipping: Arc<dyn ShippingRateProvider>,
        origin: ReturnOrigin,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            cart,
            gateway,
            shipping,
            origin,
            logger,
            state: Mutex::new(CheckoutState::Idle),
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.lock_state().clone()
    }

    /// Shipping fee that would be charged for the current cart.
    pub fn shipping_fee(&self) -> f64 {
        self.shipping.shipping_fee(&self.cart.snapshot())
    }

    /// Validates the cart and email, then asks the gateway for a session.
    ///
    /// Calls made while a request is already in flight return
    /// [`SubmitOutcome::Ignored`] without contacting the gateway. Validation
    /// failures leave the orchestrator `Idle`; gateway failures move it to
    /// `Failed`. The cart is never modified here.
    pub async fn submit(&self, email: &str) -> Result<SubmitOutcome, CheckoutError> {
        let request = {
            let mut state = self.lock_state();
            if *state == CheckoutState::Submitting {
                self.logger
                    .warn("Checkout already in progress, ignoring submission");
                return Ok(SubmitOutcome::Ignored);
            }

            match self.build_request(email) {
                Ok(request) => {
                    *state = CheckoutState::Submitting;
                    request
                }
                Err(err) => {
                    self.logger
                        .info(&format!("Checkout validation failed: {}", err));
                    *state = CheckoutState::Idle;
                    return Err(err);
                }
            }
        };

        self.logger.info(&format!(
            "Creating checkout session: {} line(s), total {}",
            request.lines.len(),
            format_gbp(request.total())
        ));

        let result = self.gateway.create_session(&request).await;

        let mut state = self.lock_state();
        match result {
            Ok(session) => {
                self.logger.info("Checkout session created, redirecting");
                *state = CheckoutState::Redirected {
                    redirect_url: session.redirect_url.clone(),
                };
                Ok(SubmitOutcome::Redirect(session))
            }
            Err(err) => {
                let err = CheckoutError::from(err);
                self.logger
                    .error(&format!("Checkout session failed: {}", err));
                *state = CheckoutState::Failed {
                    message: err.user_message(),
                };
                Err(err)
            }
        }
    }

    /// Applies the indicator found on the return trip from the payment page.
    ///
    /// The first success clears the cart; later successes are acknowledged
    /// without clearing again. A cancellation keeps the cart.
    pub fn handle_return(&self, signal: ReturnSignal) -> ReturnOutcome {
        let mut state = self.lock_state();
        match signal {
            ReturnSignal::Success => {
                if *state == CheckoutState::Completed {
                    return ReturnOutcome::Completed {
                        cart_cleared: false,
                    };
                }
                *state = CheckoutState::Completed;
                self.cart.clear_cart();
                self.logger.info("Checkout completed, cart cleared");
                ReturnOutcome::Completed { cart_cleared: true }
            }
            ReturnSignal::Canceled => {
                if *state != CheckoutState::Completed {
                    *state = CheckoutState::Idle;
                }
                self.logger.info("Checkout canceled, cart kept");
                ReturnOutcome::Canceled
            }
            ReturnSignal::Absent => ReturnOutcome::NoSignal,
        }
    }

    /// Dismisses a failure so the shopper can try again.
    pub fn acknowledge_failure(&self) {
        let mut state = self.lock_state();
        if matches!(*state, CheckoutState::Failed { .. }) {
            *state = CheckoutState::Idle;
        }
    }

    fn build_request(&self, email: &str) -> Result<CheckoutRequest, CheckoutError> {
        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let email = ContactEmail::parse(email)?;
        let shipping_fee = self.shipping.shipping_fee(&cart);
        CheckoutRequest::build(cart.lines(), shipping_fee, email, self.origin.clone())
    }

    fn lock_state(&self) -> MutexGuard<'_, CheckoutState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
