//! # HTTP Configuration
//!
//! Listener address and request body limit for the HTTP server.
//!
//! # Examples
//! ```rust
//! use login_web::config::web::HttpConfig;
//!
//! let http = HttpConfig::default();
//! assert_eq!(http.bind_addr, "0.0.0.0:8080");
//! assert_eq!(http.max_body_bytes, 1024 * 1024);
//! ```

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_BODY_MB: u32 = 1;

/// HTTP-related configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    /// Socket address passed to `TcpListener::bind`.
    pub bind_addr: String,
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_body_bytes: DEFAULT_MAX_BODY_MB as usize * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = HttpConfig::default();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_body_bytes, 1_048_576);
    }

    #[test]
    fn http_config_is_clone_and_debug() {
        let cfg = HttpConfig {
            bind_addr: "127.0.0.1:3000".into(),
            max_body_bytes: 123,
        };
        assert_eq!(cfg, cfg.clone());
        assert!(format!("{cfg:?}").contains("127.0.0.1:3000"));
    }
}
