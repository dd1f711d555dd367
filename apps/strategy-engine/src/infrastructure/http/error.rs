//! API error mapping.

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::domain::calculation::CalculationError;

use super::response::ErrorResponse;

/// API error. Every failure is reported as HTTP 500 with `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(CalculationError);

impl From<CalculationError> for ApiError {
    fn from(error: CalculationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn every_error_maps_to_500() {
        let errors = [
            CalculationError::invalid_body("bad json"),
            CalculationError::NotANumber {
                field: "spot",
                found: "string",
            },
            CalculationError::NonFinite,
        ];

        for error in errors {
            let message = error.to_string();
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(parsed.error, message);
        }
    }
}
