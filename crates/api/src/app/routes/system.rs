use axum::http::StatusCode;

/// Liveness probe; sits outside every gate.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
