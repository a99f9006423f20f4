//! API base URL configuration.
//!
//! The URL is baked in at compile time from `MINISHOP_API_URL` so the same
//! binary never mixes environments. Trunk forwards the variable during
//! `trunk build`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `MINISHOP_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// The API base URL for this build, without a trailing slash.
pub fn api_url() -> &'static str {
    option_env!("MINISHOP_API_URL").unwrap_or(DEFAULT_API_URL)
}
