use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::application::checkout::orchestrator::{CheckoutOrchestrator, SubmitOutcome};
use business::domain::checkout::model::ReturnSignal;

use crate::api::checkout::dto::{
    CheckoutRedirectResponse, CheckoutRequestBody, CheckoutReturnResponse, CheckoutStateResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    orchestrator: Arc<CheckoutOrchestrator>,
}

impl CheckoutApi {
    pub fn new(orchestrator: Arc<CheckoutOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

/// Checkout API
#[OpenApi]
impl CheckoutApi {
    /// Start checkout
    ///
    /// Validates the cart and email, then creates a payment session and
    /// returns its URL. The cart is not modified. A second request while one
    /// is in flight is rejected with 409.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn submit(&self, body: Json<CheckoutRequestBody>) -> SubmitCheckoutResponse {
        match self.orchestrator.submit(&body.0.email).await {
            Ok(SubmitOutcome::Redirect(session)) => {
                SubmitCheckoutResponse::Ok(Json(CheckoutRedirectResponse {
                    redirect_url: session.redirect_url,
                }))
            }
            Ok(SubmitOutcome::Ignored) => SubmitCheckoutResponse::Conflict(ErrorResponse::new(
                "Conflict",
                "checkout.in_progress",
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitCheckoutResponse::BadRequest(json),
                    _ => SubmitCheckoutResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get checkout state
    #[oai(path = "/checkout/state", method = "get", tag = "ApiTags::Checkout")]
    async fn state(&self) -> Json<CheckoutStateResponse> {
        Json(self.orchestrator.state().into())
    }

    /// Dismiss a failed checkout so it can be retried
    #[oai(path = "/checkout/state", method = "delete", tag = "ApiTags::Checkout")]
    async fn acknowledge(&self) -> Json<CheckoutStateResponse> {
        self.orchestrator.acknowledge_failure();
        Json(self.orchestrator.state().into())
    }

    /// Handle the return trip from the payment page
    ///
    /// `success=true` clears the cart the first time it is seen;
    /// `canceled=true` keeps it. Success wins when both are present.
    #[oai(path = "/checkout/return", method = "get", tag = "ApiTags::Checkout")]
    async fn handle_return(
        &self,
        success: Query<Option<String>>,
        canceled: Query<Option<String>>,
    ) -> Json<CheckoutReturnResponse> {
        let signal = ReturnSignal::from_flags(success.0.as_deref(), canceled.0.as_deref());
        Json(self.orchestrator.handle_return(signal).into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitCheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutRedirectResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
