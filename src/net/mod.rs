//! HTTP gateway and typed endpoint bindings.
//!
//! `gateway` owns the transport: base URL, JSON envelopes, the bearer-token
//! request interceptor and the 401 response interceptor. `auth` and
//! `products` bind every endpoint the server exposes. `normalize` is the
//! pure transformation applied to product-update bodies before they leave
//! the client.

pub mod auth;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod products;
pub mod types;
