use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::checkout::errors::GatewayError;
use business::domain::checkout::gateway::CheckoutGateway;
use business::domain::checkout::model::{
    CheckoutLine, CheckoutLineKind, CheckoutRequest, CheckoutSession,
};

use crate::client::PaymentsClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionItemBody<'a> {
    name: &'a str,
    unit_amount: i64,
    quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    kind: CheckoutLineKind,
}

impl<'a> From<&'a CheckoutLine> for SessionItemBody<'a> {
    fn from(line: &'a CheckoutLine) -> Self {
        Self {
            name: &line.name,
            unit_amount: line.unit_amount,
            quantity: line.quantity,
            image: line.image.as_deref(),
            kind: line.kind,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionBody<'a> {
    email: &'a str,
    origin: &'a str,
    items: Vec<SessionItemBody<'a>>,
}

impl<'a> From<&'a CheckoutRequest> for CreateSessionBody<'a> {
    fn from(request: &'a CheckoutRequest) -> Self {
        Self {
            email: request.customer_email.as_str(),
            origin: request.origin.as_str(),
            items: request.lines.iter().map(SessionItemBody::from).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SessionResponseBody {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Creates checkout sessions through a single JSON request/response endpoint.
pub struct HttpCheckoutGateway {
    client: PaymentsClient,
}

impl HttpCheckoutGateway {
    pub fn new(client: PaymentsClient) -> Self {
        Self { client }
    }

    /// Maps a raw endpoint reply onto a session or a gateway error.
    fn interpret_response(status: u16, body: &str) -> Result<CheckoutSession, GatewayError> {
        let parsed = serde_json::from_str::<SessionResponseBody>(body);

        if !(200..300).contains(&status) {
            let message = parsed
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("checkout endpoint returned status {}", status));
            return Err(GatewayError::Rejected { status, message });
        }

        let parsed = parsed.map_err(|_| GatewayError::InvalidResponse)?;
        parsed
            .url
            .filter(|url| !url.trim().is_empty())
            .map(|redirect_url| CheckoutSession { redirect_url })
            .ok_or(GatewayError::MissingRedirect)
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let body = CreateSessionBody::from(request);

        let mut builder = self
            .client
            .client
            .post(&self.client.endpoint_url)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(auth) = self.client.auth_header() {
            builder = builder.header("Authorization", auth);
        }

        let response = builder.send().await.map_err(|_| GatewayError::Network)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|_| GatewayError::Network)?;

        Self::interpret_response(status, &text)
    }
}
