use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    /// Validation failures carry an actionable message for the shopper;
    /// gateway failures are reported as bad gateway.
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = if self.is_validation() {
            (StatusCode::BAD_REQUEST, "ValidationError")
        } else {
            (StatusCode::BAD_GATEWAY, "CheckoutFailed")
        };

        (status, ErrorResponse::new(name, self.user_message()))
    }
}
