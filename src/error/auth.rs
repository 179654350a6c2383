//! # Authentication errors
//!
//! [`AuthError`] is what the security middleware rejects a request with.
//! Every credential problem maps to `401 Unauthorized` with a
//! `WWW-Authenticate: Basic` challenge; storage failures map to
//! `500 Internal Server Error` with a generic body.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// `WWW-Authenticate` challenge sent with every 401.
pub const CHALLENGE: &str = "Basic realm=\"login-web\"";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingCredentials,

    #[error("Invalid authorization header format")]
    InvalidAuthHeader,

    /// Unknown username or wrong password; the two are not distinguished.
    #[error("Bad credentials")]
    BadCredentials,

    #[error("User is disabled")]
    Disabled,

    #[error("User account is locked")]
    Locked,

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));

        let mut res = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            res.headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
        }
        res
    }
}
