/// Failures reported by the external checkout-session collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("checkout.network_error")]
    Network,
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("checkout.missing_redirect_url")]
    MissingRedirect,
    #[error("checkout.invalid_response")]
    InvalidResponse,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.email_required")]
    MissingEmail,
    #[error("checkout.email_invalid")]
    InvalidEmail,
    #[error("checkout.invalid_price")]
    InvalidPrice { item: String },
    #[error("checkout.invalid_shipping_fee")]
    InvalidShippingFee,
    #[error("checkout.amount_too_large")]
    AmountTooLarge,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CheckoutError {
    /// Validation failures are detected locally, before any external call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CheckoutError::Gateway(_))
    }

    /// Message suitable for showing to the shopper.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::EmptyCart => "Your cart is empty.".to_string(),
            CheckoutError::MissingEmail => "Please enter your email address.".to_string(),
            CheckoutError::InvalidEmail => "Please enter a valid email address.".to_string(),
            CheckoutError::InvalidPrice { item } => {
                format!("\"{}\" has an invalid price and cannot be checked out.", item)
            }
            CheckoutError::InvalidShippingFee => "Shipping could not be calculated.".to_string(),
            CheckoutError::AmountTooLarge => {
                "Your order total is too large to check out.".to_string()
            }
            CheckoutError::Gateway(GatewayError::Rejected { message, .. }) => {
                format!("Checkout failed: {}", message)
            }
            CheckoutError::Gateway(_) => {
                "Checkout failed. Please try again in a moment.".to_string()
            }
        }
    }
}
