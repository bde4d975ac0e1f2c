use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keyhole_shortener::ShortenerError;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

pub struct AppError(ShortenerError);

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            ShortenerError::InvalidUrl(message) => (StatusCode::BAD_REQUEST, message),
            // Unknown codes are an expected outcome of decode, not a
            // server fault.
            ShortenerError::NotFound => (
                StatusCode::NOT_FOUND,
                "Short URL not found".to_string(),
            ),
            ShortenerError::Storage(message) => {
                error!(message, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
