//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with fallback defaults.
//! Each reader has a `*_from` twin taking a provider closure so parsing can be
//! tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use login_web::config::env::{read_string, read_u32};
//!
//! let addr = read_string("HTTP_BIND_ADDR", "0.0.0.0:8080");
//! let limit = read_u32("HTTP_MAX_BODY_MB", 1);
//! ```

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if it is missing or unparsable.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(process_env, name, default)
}

/// Reads a `u32` using a custom provider function.
///
/// # Example
/// ```rust
/// use login_web::config::env::read_u32_from;
///
/// assert_eq!(read_u32_from(|_| Some(" 42 ".into()), "LIMIT", 10), 42);
/// assert_eq!(read_u32_from(|_| None, "LIMIT", 10), 10);
/// ```
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a string from an environment variable.
///
/// Surrounding whitespace and quotes are stripped; an empty result falls back
/// to `default`.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(process_env, name, default)
}

pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
