//! Wire types shared with the MiniShop API.
//!
//! Field names follow the server's JSON exactly (Spanish domain names,
//! camelCase for the server-derived promotion fields).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as the server (or a decoded IdP token) reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    pub rol: String,
}

/// Payload of a fulfilled login: bearer token plus the user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: User,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub imagen: String,
    #[serde(default = "default_activo")]
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promocion: Option<Promocion>,
    /// Server-derived; read-only on the client.
    #[serde(rename = "precioConDescuento", default, skip_serializing_if = "Option::is_none")]
    pub precio_con_descuento: Option<f64>,
    /// Server-derived; read-only on the client.
    #[serde(rename = "promocionVigente", default)]
    pub promocion_vigente: bool,
}

fn default_activo() -> bool {
    true
}

impl Product {
    /// Category shown to the user; an empty category displays as "General".
    pub fn display_categoria(&self) -> &str {
        if self.categoria.trim().is_empty() {
            "General"
        } else {
            &self.categoria
        }
    }

    /// Effective price. Only a vigente promotion discounts; otherwise the
    /// server-derived field is treated as equal to `precio`.
    pub fn precio_final(&self) -> f64 {
        if self.promocion_vigente {
            self.precio_con_descuento.unwrap_or(self.precio)
        } else {
            self.precio
        }
    }
}

/// A product promotion, possibly bounded by a date window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Promocion {
    #[serde(default)]
    pub activa: bool,
    #[serde(default)]
    pub tipo: PromoTipo,
    #[serde(default)]
    pub valor: f64,
    #[serde(rename = "fechaInicio", default)]
    pub fecha_inicio: Option<String>,
    #[serde(rename = "fechaFin", default)]
    pub fecha_fin: Option<String>,
}

/// Promotion kind: percentage off or a fixed amount off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromoTipo {
    #[default]
    #[serde(rename = "porcentaje")]
    Porcentaje,
    #[serde(rename = "monto_fijo")]
    MontoFijo,
}

/// A category entry with its server-computed product count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub slug: String,
    #[serde(default)]
    pub count: u32,
}
