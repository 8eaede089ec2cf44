use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::stock::errors::StockError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const SAVE_FAILED_BANNER: &str = "Could not save stock levels. Your edits were not stored.";

impl IntoErrorResponse for StockError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            StockError::SaveFailed => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("SaveFailed", SAVE_FAILED_BANNER),
            ),
            StockError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", "repository.persistence"),
            ),
        }
    }
}
