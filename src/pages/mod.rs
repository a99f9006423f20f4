//! Page components, one per route.

pub mod auth_callback;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
