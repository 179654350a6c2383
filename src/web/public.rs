use axum::{Router, routing::get};

/// Body returned by `GET /public/home`.
pub const HOME_BODY: &str = "Public Home";

/// `GET /public/home`: always `200 OK` with a fixed body.
pub async fn home() -> &'static str {
    HOME_BODY
}

/// Routes reachable without credentials, mounted under `/public`.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/public/home", get(home))
}
