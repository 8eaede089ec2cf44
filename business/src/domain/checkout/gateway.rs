use async_trait::async_trait;

use super::errors::GatewayError;
use super::model::{CheckoutRequest, CheckoutSession};

/// Port to the external payment processor's checkout-session endpoint.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, GatewayError>;
}
