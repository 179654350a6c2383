//! Authentication middleware for Axum.
//!
//! Wrap protected routes with
//! `axum::middleware::from_fn_with_state(service, require_authentication)`.
//! On success the [`Principal`](crate::auth::Principal) is added to the
//! request extensions, where handlers can take it with
//! `Extension<Principal>`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::auth::{BasicCredentials, UserDetailsService, authenticate};
use crate::error::AuthError;

/// Rejects the request unless it carries valid Basic credentials.
pub async fn require_authentication(
    State(service): State<UserDetailsService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let credentials = BasicCredentials::from_headers(request.headers())?;

    // repository I/O and argon2 are both blocking
    let principal = tokio::task::spawn_blocking(move || authenticate(&service, &credentials))
        .await
        .map_err(|e| {
            error!(error = %e, "authentication task failed");
            AuthError::Internal(e.into())
        })??;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Extension, Router,
        body::Body,
        http::{StatusCode, header::AUTHORIZATION},
        middleware::from_fn_with_state,
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::auth::{Principal, password::hash_password};
    use crate::user::{InMemoryUserRepository, User};

    fn app() -> Router {
        let repo = InMemoryUserRepository::new([User {
            id: 1,
            username: "alice".into(),
            password: hash_password("pw").unwrap(),
            role: "ROLE_USER".into(),
            enabled: true,
            locked: false,
        }]);
        let service = UserDetailsService::from_repository(repo);

        Router::new()
            .route(
                "/whoami",
                get(|Extension(p): Extension<Principal>| async move { p.username().to_string() }),
            )
            .layer(from_fn_with_state(service, require_authentication))
    }

    fn request(auth: Option<&str>) -> axum::http::Request<Body> {
        let mut b = axum::http::Request::builder().uri("/whoami");
        if let Some(a) = auth {
            b = b.header(AUTHORIZATION, a);
        }
        b.body(Body::empty()).unwrap()
    }

    fn basic(user: &str, pw: &str) -> String {
        BasicCredentials {
            username: user.into(),
            password: pw.into(),
        }
        .to_header_value()
    }

    #[tokio::test]
    async fn principal_reaches_handler() {
        let res = app()
            .oneshot(request(Some(basic("alice", "pw").as_str())))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"alice");
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let res = app().oneshot(request(None)).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(res.headers().contains_key("www-authenticate"));
    }

    #[tokio::test]
    async fn wrong_password_is_401() {
        let res = app()
            .oneshot(request(Some(basic("alice", "bad").as_str())))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_header_is_401() {
        let res = app()
            .oneshot(request(Some("Bearer token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
