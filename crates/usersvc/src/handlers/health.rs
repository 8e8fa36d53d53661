use axum::http::StatusCode;

/// GET /livez - Liveness probe. Returns 200 immediately, no dependency checks.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
