//! Client-side state: the observable store and its slices.
//!
//! DESIGN
//! ======
//! The store is a pair of `RwSignal` slices (`auth`, `products`) provided
//! via context. Every mutation flows through a slice reducer applying a
//! tagged [`op::Lifecycle`] event, so views only ever observe consistent
//! snapshots and the reducers stay natively testable.

pub mod auth;
pub mod credentials;
pub mod op;
pub mod products;
