//! Gateway error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a gateway call, as surfaced to the operation runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered 401. The gateway has already cleared the
    /// credential store and forced navigation to `/login`.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx answer, with the server's message when it sent one.
    #[error("http {status}: {}", message.as_deref().unwrap_or("sin mensaje"))]
    Api { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown to the user: the server's message verbatim when there
    /// is one, otherwise the per-operation fallback phrase.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message: Some(m), .. } => m.clone(),
            _ => fallback.to_owned(),
        }
    }
}
