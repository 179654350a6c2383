//! # Application router
//!
//! The security chain is expressed by how routers are merged:
//!
//! | Path | Access |
//! |------|--------|
//! | `/public/home` | anyone |
//! | anything else | HTTP Basic credentials required, then `404` |
//!
//! # Example
//! ```rust,no_run
//! use login_web::auth::UserDetailsService;
//! use login_web::config::web::HttpConfig;
//! use login_web::user::InMemoryUserRepository;
//! use login_web::web::router::build_router;
//!
//! let service = UserDetailsService::from_repository(InMemoryUserRepository::default());
//! let app = build_router(service, &HttpConfig::default());
//! ```

use axum::{Router, extract::DefaultBodyLimit, middleware::from_fn_with_state};
use tower_http::trace::TraceLayer;

use crate::auth::{UserDetailsService, require_authentication};
use crate::config::web::HttpConfig;
use crate::web::{fallback, public};

/// Builds the full application router.
pub fn build_router(service: UserDetailsService, http: &HttpConfig) -> Router {
    let protected = Router::new()
        .fallback(fallback::not_found)
        .layer(from_fn_with_state(service, require_authentication));

    public::routes()
        .merge(protected)
        .layer(DefaultBodyLimit::max(http.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
