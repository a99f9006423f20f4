//! The single HTTP client every endpoint binding goes through.
//!
//! Request interception: the bearer token is read from the credential store
//! per request, never cached, so a `clear` is observed by the very next
//! call. Response interception: a 401 from any endpoint clears the
//! credential store, forces navigation to `/login` and rejects with
//! [`ApiError::Unauthorized`]; every other error propagates unchanged.
//!
//! All server responses are `{data, message?}` envelopes. On success the
//! gateway unwraps and returns `data`; on failure it surfaces `message`.
//!
//! Real HTTP requires a browser (`csr` feature); without it every call
//! rejects with a network error, mirroring how the server-side stubs of the
//! REST helpers behave.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::error::ApiError;

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send("GET", path, None).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send("POST", path, Some(body)).await
}

pub async fn put<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send("PUT", path, Some(body)).await
}

pub async fn patch<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send("PATCH", path, None).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send("DELETE", path, None).await
}

/// Unwrap a `{data, message?}` envelope for a response with `status`.
///
/// 2xx returns the decoded `data`; anything else becomes [`ApiError::Api`]
/// carrying the server's `message` when present.
pub fn unwrap_envelope<T: DeserializeOwned>(status: u16, body: &Value) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        Err(ApiError::Api { status, message })
    }
}

#[cfg(feature = "csr")]
async fn send<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<Value>,
) -> Result<T, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{}{path}", crate::config::api_url());
    let mut builder = match method {
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "PATCH" => Request::patch(&url),
        "DELETE" => Request::delete(&url),
        _ => Request::get(&url),
    }
    .header("Content-Type", "application/json");

    // Attach the bearer token, read from the credential store per request.
    if let Some(token) = crate::state::credentials::token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let sent = match body {
        Some(b) => {
            builder
                .json(&b)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if status == 401 {
        log::warn!("401 from {method} {path}: clearing session");
        crate::state::credentials::clear();
        force_login_redirect();
        return Err(ApiError::Unauthorized);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    unwrap_envelope(status, &body)
}

#[cfg(not(feature = "csr"))]
async fn send<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<Value>,
) -> Result<T, ApiError> {
    let _ = (method, path, body);
    Err(ApiError::Network("requiere un entorno de navegador".to_owned()))
}

/// Hard navigation to the login view after an observed 401.
#[cfg(feature = "csr")]
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
