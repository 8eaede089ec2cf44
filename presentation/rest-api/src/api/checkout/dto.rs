use poem_openapi::Object;

use business::application::checkout::orchestrator::ReturnOutcome;
use business::domain::checkout::model::CheckoutState;

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequestBody {
    /// Contact email forwarded to the payment page
    pub email: String,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRedirectResponse {
    /// Payment page the shopper should be sent to
    pub redirect_url: String,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutStateResponse {
    /// One of `idle`, `submitting`, `redirected`, `failed`, `completed`
    pub status: String,
    #[oai(skip_serializing_if_is_none)]
    pub redirect_url: Option<String>,
    /// Set when the last attempt failed
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<CheckoutState> for CheckoutStateResponse {
    fn from(state: CheckoutState) -> Self {
        let status = state.to_string();
        let (redirect_url, message) = match state {
            CheckoutState::Redirected { redirect_url } => (Some(redirect_url), None),
            CheckoutState::Failed { message } => (None, Some(message)),
            _ => (None, None),
        };
        Self {
            status,
            redirect_url,
            message,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutReturnResponse {
    /// One of `completed`, `canceled`, `none`
    pub outcome: String,
    /// True only the first time a success indicator is handled
    pub cart_cleared: bool,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<ReturnOutcome> for CheckoutReturnResponse {
    fn from(outcome: ReturnOutcome) -> Self {
        let message = Some(outcome.message().to_string()).filter(|m| !m.is_empty());
        let (outcome, cart_cleared) = match outcome {
            ReturnOutcome::Completed { cart_cleared } => ("completed", cart_cleared),
            ReturnOutcome::Canceled => ("canceled", false),
            ReturnOutcome::NoSignal => ("none", false),
        };
        Self {
            outcome: outcome.to_string(),
            cart_cleared,
            message,
        }
    }
}
