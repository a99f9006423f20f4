//! Update-payload normalizer.
//!
//! Applied to product-update bodies only. Partial updates must distinguish
//! "clear this field" (explicit empty string) from "leave unchanged" (field
//! omitted), and the server must never see stringly-typed numbers, a `NaN`,
//! or a stringly-typed boolean. Form fields arrive here exactly as typed;
//! this function owns every coercion.
//!
//! Idempotent: normalizing an already-normalized body is a no-op.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::{Map, Value};

/// Normalize a product-update body. Recognized fields only; anything the
/// caller did not supply (or supplied as `null`) is omitted from the output.
pub fn normalize_update(data: &Value) -> Value {
    let mut out = Map::new();

    for key in ["nombre", "descripcion"] {
        if let Some(v) = present(data, key) {
            out.insert(key.to_owned(), Value::String(coerce_trimmed(v)));
        }
    }

    for key in ["precio", "stock"] {
        // Unparsable values are dropped, never transmitted as NaN.
        if let Some(v) = present(data, key) {
            if !matches!(v, Value::String(s) if s.is_empty()) {
                if let Some(n) = finite_number(v) {
                    out.insert(key.to_owned(), number_value(n));
                }
            }
        }
    }

    if let Some(v) = present(data, "imagen") {
        // An explicit empty string clears the image and is preserved as-is.
        out.insert("imagen".to_owned(), Value::String(coerce_trimmed(v)));
    }

    if let Some(v) = present(data, "categoria") {
        out.insert("categoria".to_owned(), Value::String(coerce_trimmed(v)));
    }

    if let Some(v) = present(data, "activo") {
        out.insert("activo".to_owned(), Value::Bool(truthy(v)));
    }

    // The promotion is always emitted in full, with defaults for anything
    // the caller left out.
    if let Some(promo) = present(data, "promocion") {
        let tipo = promo
            .get("tipo")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or("porcentaje");
        let valor = promo.get("valor").and_then(finite_number).unwrap_or(0.0);
        let fecha = |key: &str| {
            promo
                .get(key)
                .filter(|v| truthy(v))
                .cloned()
                .unwrap_or(Value::Null)
        };

        let mut normalized = Map::new();
        normalized.insert(
            "activa".to_owned(),
            Value::Bool(promo.get("activa").is_some_and(truthy)),
        );
        normalized.insert("tipo".to_owned(), Value::String(tipo.to_owned()));
        normalized.insert("valor".to_owned(), number_value(valor));
        normalized.insert("fechaInicio".to_owned(), fecha("fechaInicio"));
        normalized.insert("fechaFin".to_owned(), fecha("fechaFin"));
        out.insert("promocion".to_owned(), Value::Object(normalized));
    }

    Value::Object(out)
}

/// A field counts as supplied when it is present and not `null`.
fn present<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !v.is_null())
}

fn coerce_trimmed(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_owned(),
        other => other.to_string().trim().to_owned(),
    }
}

/// Numeric coercion with JS form-field semantics: numbers pass through,
/// numeric strings parse (whitespace-only counts as zero), booleans map to
/// 0/1, everything else is not a number.
fn finite_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) if !s.is_empty() => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
            }
        }
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    }
}

/// Integral values serialize without a decimal point.
fn number_value(n: f64) -> Value {
    #[allow(clippy::cast_possible_truncation)]
    if n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&n) {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// JS-style truthiness for the `activo` and promotion flags.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
