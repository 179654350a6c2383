use axum::{http::StatusCode, response::IntoResponse};

/// Final fallback of the protected router.
///
/// Only reached once authentication succeeded, so an unknown path answers
/// `404 Not Found` to authenticated callers and `401` to everyone else.
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
