//! Product endpoint bindings: the public catalog plus the protected
//! administration operations.

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::gateway;
use crate::net::normalize::normalize_update;
use crate::net::types::{Category, Product};
use crate::util::uri::encode_segment;

/// `GET /products/public` — the visible catalog.
pub async fn get_public() -> Result<Vec<Product>, ApiError> {
    gateway::get("/products/public").await
}

/// `GET /products/public/promotions` — products with a vigente promotion.
pub async fn get_promotions() -> Result<Vec<Product>, ApiError> {
    gateway::get("/products/public/promotions").await
}

/// `GET /products/public/categories` — categories with counts.
pub async fn get_categories() -> Result<Vec<Category>, ApiError> {
    gateway::get("/products/public/categories").await
}

/// `GET /products/public/category/{name}` with the name URL-encoded.
pub async fn get_by_category(category: &str) -> Result<Vec<Product>, ApiError> {
    gateway::get(&format!("/products/public/category/{}", encode_segment(category))).await
}

/// `GET /products` — every product, including hidden ones (admin).
pub async fn get_all() -> Result<Vec<Product>, ApiError> {
    gateway::get("/products").await
}

/// `GET /products/{id}`.
pub async fn get_by_id(id: &str) -> Result<Product, ApiError> {
    gateway::get(&format!("/products/{id}")).await
}

/// `POST /products` — the body is the full product as entered.
pub async fn create(data: &Value) -> Result<Product, ApiError> {
    gateway::post("/products", data).await
}

/// `PUT /products/{id}` — the body goes through the update normalizer.
pub async fn update(id: &str, data: &Value) -> Result<Product, ApiError> {
    gateway::put(&format!("/products/{id}"), &normalize_update(data)).await
}

/// `DELETE /products/{id}` — soft delete (`activo = false`).
pub async fn delete(id: &str) -> Result<Value, ApiError> {
    gateway::delete(&format!("/products/{id}")).await
}

/// `DELETE /products/{id}/permanent` — removes the record.
pub async fn delete_permanent(id: &str) -> Result<Value, ApiError> {
    gateway::delete(&format!("/products/{id}/permanent")).await
}

/// `PATCH /products/{id}/toggle-status` — flips `activo`.
pub async fn toggle_status(id: &str) -> Result<Product, ApiError> {
    gateway::patch(&format!("/products/{id}/toggle-status")).await
}

/// `PATCH /products/{id}/toggle-promotion` — flips `promocion.activa`.
pub async fn toggle_promotion(id: &str) -> Result<Product, ApiError> {
    gateway::patch(&format!("/products/{id}/toggle-promotion")).await
}
