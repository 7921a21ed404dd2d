use crate::domain::error::GatewayError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype over the domain error so the HTTP status mapping lives in the
/// adapter layer.
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            GatewayError::EventDecode(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error_code": "decode_error", "message": msg }),
            ),
            GatewayError::CustomerNotFound(source_id) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error_code": "customer_not_found",
                    "message": self.0.to_string(),
                    "source_id": source_id,
                }),
            ),
            GatewayError::ErpRequest { status, body, request } => {
                tracing::error!(status = *status, erp_response = %body, request = %request, "erp request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    // Both the response body and the outgoing request, so the
                    // failing call can be reproduced from this payload alone.
                    serde_json::json!({
                        "error_code": "erp_request_failed",
                        "message": self.0.to_string(),
                        "erp_status": status,
                        "erp_response": body,
                        "request": request,
                    }),
                )
            }
            GatewayError::Transport(err) => {
                tracing::error!("erp transport error: {err}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    serde_json::json!({ "error_code": "erp_unreachable", "message": err.to_string() }),
                )
            }
            GatewayError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error_code": "internal_error", "message": "internal error" }),
                )
            }
            GatewayError::Secrets(err) => {
                tracing::error!("secret store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error_code": "internal_error", "message": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
