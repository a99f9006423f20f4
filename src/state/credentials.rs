//! Credential store: `{token, user}` persisted across page reloads.
//!
//! Two keys in `localStorage` under the `csr` feature; a process-local map
//! otherwise (native tests and non-browser builds). Reads are synchronous
//! and never cached, so a `clear` by the 401 interceptor is observed by the
//! next request even if it was dispatched before navigation completed.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Load the persisted session, if both keys are present and parseable.
pub fn load() -> Option<(String, User)> {
    let token = get_item(TOKEN_KEY)?;
    let user = serde_json::from_str(&get_item(USER_KEY)?).ok()?;
    Some((token, user))
}

/// The bearer token, read fresh on every call.
pub fn token() -> Option<String> {
    get_item(TOKEN_KEY)
}

/// Persist the session. Overwrites any previous one.
pub fn save(token: &str, user: &User) {
    set_item(TOKEN_KEY, token);
    if let Ok(serialized) = serde_json::to_string(user) {
        set_item(USER_KEY, &serialized);
    }
}

/// Drop both keys. Idempotent.
pub fn clear() {
    remove_item(TOKEN_KEY);
    remove_item(USER_KEY);
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn get_item(key: &str) -> Option<String> {
    storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(feature = "csr")]
fn set_item(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}

#[cfg(feature = "csr")]
fn remove_item(key: &str) {
    if let Some(s) = storage() {
        let _ = s.remove_item(key);
    }
}

#[cfg(not(feature = "csr"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove_item(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(feature = "csr"))]
use memory::{get_item, remove_item, set_item};
