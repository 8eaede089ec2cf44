use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::errors::CheckoutError;

/// Origin used for return URLs when the caller-supplied one is unusable.
pub const FALLBACK_ORIGIN: &str = "https://jinx-sells.com";

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Shopper contact email, trimmed and syntactically validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(raw: &str) -> Result<Self, CheckoutError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CheckoutError::MissingEmail);
        }
        let matches = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(trimmed));
        if !matches {
            return Err(CheckoutError::InvalidEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storefront origin handed to the payment collaborator for building return
/// URLs. Only `http(s)` origins with a host are accepted; anything else is
/// replaced by [`FALLBACK_ORIGIN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnOrigin(String);

impl ReturnOrigin {
    pub fn parse_or_fallback(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_else(Self::fallback)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw.trim()).ok()?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return None;
        }
        Some(Self(raw.trim().trim_end_matches('/').to_string()))
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_ORIGIN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReturnOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
