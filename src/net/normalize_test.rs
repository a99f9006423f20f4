use serde_json::json;

use super::*;

#[test]
fn partial_update_keeps_only_supplied_fields() {
    // Edit form: rename, clear the image, restock; price left blank.
    let body = json!({
        "nombre": "  New  ",
        "precio": "",
        "stock": "3",
        "imagen": ""
    });
    let normalized = normalize_update(&body);
    assert_eq!(normalized, json!({ "nombre": "New", "stock": 3, "imagen": "" }));
}

#[test]
fn null_and_missing_fields_are_omitted() {
    let normalized = normalize_update(&json!({ "nombre": null, "descripcion": "  ok  " }));
    assert_eq!(normalized, json!({ "descripcion": "ok" }));
}

#[test]
fn unparsable_numbers_are_dropped() {
    let normalized = normalize_update(&json!({ "precio": "abc", "stock": "1,5" }));
    assert_eq!(normalized, json!({}));
}

#[test]
fn numeric_strings_become_numbers() {
    let normalized = normalize_update(&json!({ "precio": "19.99", "stock": 4 }));
    assert_eq!(normalized, json!({ "precio": 19.99, "stock": 4 }));
}

#[test]
fn integral_numbers_serialize_without_decimals() {
    let normalized = normalize_update(&json!({ "precio": "100" }));
    assert_eq!(serde_json::to_string(&normalized).unwrap(), r#"{"precio":100}"#);
}

#[test]
fn empty_imagen_is_an_explicit_clear() {
    let normalized = normalize_update(&json!({ "imagen": "" }));
    assert_eq!(normalized, json!({ "imagen": "" }));
}

#[test]
fn activo_is_coerced_to_bool() {
    assert_eq!(normalize_update(&json!({ "activo": 1 })), json!({ "activo": true }));
    assert_eq!(normalize_update(&json!({ "activo": "" })), json!({ "activo": false }));
    assert_eq!(normalize_update(&json!({ "activo": false })), json!({ "activo": false }));
}

#[test]
fn promocion_is_emitted_in_full_with_defaults() {
    let normalized = normalize_update(&json!({ "promocion": { "valor": "15" } }));
    assert_eq!(
        normalized,
        json!({
            "promocion": {
                "activa": false,
                "tipo": "porcentaje",
                "valor": 15,
                "fechaInicio": null,
                "fechaFin": null
            }
        })
    );
}

#[test]
fn promocion_keeps_supplied_values() {
    let normalized = normalize_update(&json!({
        "promocion": {
            "activa": true,
            "tipo": "monto_fijo",
            "valor": 250,
            "fechaInicio": "2026-03-01",
            "fechaFin": ""
        }
    }));
    assert_eq!(
        normalized,
        json!({
            "promocion": {
                "activa": true,
                "tipo": "monto_fijo",
                "valor": 250,
                "fechaInicio": "2026-03-01",
                "fechaFin": null
            }
        })
    );
}

#[test]
fn unrecognized_fields_never_pass_through() {
    let normalized = normalize_update(&json!({ "_id": "p1", "rol": "admin", "nombre": "x" }));
    assert_eq!(normalized, json!({ "nombre": "x" }));
}

#[test]
fn normalize_is_idempotent() {
    let bodies = [
        json!({
            "nombre": "  New  ",
            "precio": "100",
            "stock": "3",
            "imagen": "",
            "activo": "yes",
            "promocion": { "valor": "15", "fechaInicio": "2026-03-01" }
        }),
        json!({ "descripcion": "algo", "categoria": "  Hogar " }),
        json!({}),
    ];
    for body in bodies {
        let once = normalize_update(&body);
        assert_eq!(normalize_update(&once), once);
    }
}
