//! Auth endpoint bindings.

use serde::Serialize;
use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::gateway;
use crate::net::types::{SessionData, User};

#[derive(Serialize)]
struct RegisterRequest<'a> {
    nombre: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct PasswordRequest<'a> {
    password: &'a str,
}

/// `POST /auth/register`. Does not log the new user in.
pub async fn register(nombre: &str, email: &str, password: &str) -> Result<Value, ApiError> {
    gateway::post("/auth/register", &RegisterRequest { nombre, email, password }).await
}

/// `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<SessionData, ApiError> {
    gateway::post("/auth/login", &LoginRequest { email, password }).await
}

/// `GET /auth/verify` — validates the stored token and returns the user.
pub async fn verify() -> Result<User, ApiError> {
    gateway::get("/auth/verify").await
}

/// `POST /auth/forgot-password`.
pub async fn forgot_password(email: &str) -> Result<Value, ApiError> {
    gateway::post("/auth/forgot-password", &EmailRequest { email }).await
}

/// `POST /auth/reset-password/{token}`. The reset token travels in the URL
/// path for compatibility with the emailed link format.
pub async fn reset_password(token: &str, password: &str) -> Result<Value, ApiError> {
    gateway::post(&format!("/auth/reset-password/{token}"), &PasswordRequest { password }).await
}
