//! # HTTP Basic credentials
//!
//! Parses `Authorization: Basic <base64(username:password)>`.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::AuthError;

/// Username/password pair taken from a request.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl BasicCredentials {
    /// Extracts credentials from request headers.
    ///
    /// A missing header is [`AuthError::MissingCredentials`]; anything
    /// unparsable is [`AuthError::InvalidAuthHeader`].
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let value = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;
        Self::from_header(value)
    }

    /// Parses a raw `Authorization` header value.
    ///
    /// The scheme is matched case-insensitively. The password is everything
    /// after the first `:`, so it may itself contain colons.
    ///
    /// # Example
    /// ```rust
    /// use login_web::auth::basic::BasicCredentials;
    ///
    /// // "alice:pa:ss"
    /// let c = BasicCredentials::from_header("Basic YWxpY2U6cGE6c3M=").unwrap();
    /// assert_eq!(c.username, "alice");
    /// assert_eq!(c.password, "pa:ss");
    /// ```
    pub fn from_header(value: &str) -> Result<Self, AuthError> {
        let (scheme, encoded) = value
            .trim()
            .split_once(' ')
            .ok_or(AuthError::InvalidAuthHeader)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::InvalidAuthHeader);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::InvalidAuthHeader)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::InvalidAuthHeader)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(AuthError::InvalidAuthHeader)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Encodes the pair as an `Authorization` header value.
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}
