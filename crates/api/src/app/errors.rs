use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{debug, error, warn};

use accounts_core::ServiceFailure;

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Status and message for a user service failure.
///
/// A service error keeps its own status and message. Anything without a usable
/// error status becomes a generic 500.
pub fn failure_status(err: ServiceFailure) -> (StatusCode, String) {
    match err {
        ServiceFailure::Service(e) => match StatusCode::from_u16(e.status) {
            Ok(status) if status.is_client_error() || status.is_server_error() => {
                debug!(status = e.status, error_message = %e.message, "user service failure");
                (status, e.message)
            }
            _ => {
                warn!(status = e.status, error_message = %e.message, "user service failure carried an unusable status");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        },
        ServiceFailure::Unexpected(msg) => {
            error!(error = %msg, "unexpected user service failure");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
        }
    }
}

/// `{"error": message}` with the failure's status.
pub fn service_failure_to_json(err: ServiceFailure) -> Response {
    let (status, message) = failure_status(err);
    (status, axum::Json(json!({ "error": message }))).into_response()
}

/// Plain-text `message` with the failure's status.
pub fn service_failure_to_text(err: ServiceFailure) -> Response {
    let (status, message) = failure_status(err);
    (status, message).into_response()
}
