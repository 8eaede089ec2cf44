use std::env;
use std::time::Duration;

use anyhow::{Context, bail};

use business::domain::checkout::shipping::DEFAULT_SHIPPING_FEE;
use business::domain::checkout::value_objects::ReturnOrigin;

/// Checkout-session endpoint and storefront checkout settings
pub struct CheckoutConfig {
    pub endpoint_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub origin: ReturnOrigin,
    pub shipping_fee: f64,
}

impl CheckoutConfig {
    /// Load checkout configuration from environment variables
    ///
    /// Environment variables:
    /// - CHECKOUT_ENDPOINT_URL: Checkout-session endpoint (required)
    /// - CHECKOUT_API_KEY: Bearer key sent to the endpoint (optional)
    /// - CHECKOUT_TIMEOUT_SECS: Request timeout (default: 30)
    /// - STOREFRONT_ORIGIN: Origin used for return URLs (default: fixed storefront origin)
    /// - SHIPPING_FEE: Flat shipping fee in major units (default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let endpoint_url = lookup("CHECKOUT_ENDPOINT_URL")
            .filter(|v| !v.trim().is_empty())
            .context("CHECKOUT_ENDPOINT_URL must be set")?;

        let timeout_secs = match lookup("CHECKOUT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CHECKOUT_TIMEOUT_SECS is not a number: {}", raw))?,
            None => 30,
        };

        let shipping_fee = match lookup("SHIPPING_FEE") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("SHIPPING_FEE is not a number: {}", raw))?,
            None => DEFAULT_SHIPPING_FEE,
        };
        if !shipping_fee.is_finite() || shipping_fee < 0.0 {
            bail!("SHIPPING_FEE must be a non-negative amount");
        }

        Ok(Self {
            endpoint_url,
            api_key: lookup("CHECKOUT_API_KEY"),
            timeout: Duration::from_secs(timeout_secs),
            origin: ReturnOrigin::parse_or_fallback(lookup("STOREFRONT_ORIGIN").as_deref()),
            shipping_fee,
        })
    }
}
