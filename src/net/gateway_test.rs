use serde_json::json;

use super::*;
use crate::net::types::Product;

#[test]
fn success_unwraps_data() {
    let body = json!({ "data": [{ "_id": "p1", "nombre": "Mate", "precio": 10.0 }] });
    let items: Vec<Product> = unwrap_envelope(200, &body).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "p1");
}

#[test]
fn success_without_data_decodes_null() {
    // Mutation endpoints may answer with only a message.
    let body = json!({ "message": "Producto eliminado" });
    let out: serde_json::Value = unwrap_envelope(200, &body).unwrap();
    assert!(out.is_null());
}

#[test]
fn error_carries_server_message() {
    let body = json!({ "message": "El precio debe ser positivo" });
    let err = unwrap_envelope::<serde_json::Value>(400, &body).unwrap_err();
    assert_eq!(
        err,
        ApiError::Api { status: 400, message: Some("El precio debe ser positivo".to_owned()) }
    );
}

#[test]
fn error_without_message_has_none() {
    let err = unwrap_envelope::<serde_json::Value>(500, &serde_json::Value::Null).unwrap_err();
    assert_eq!(err, ApiError::Api { status: 500, message: None });
}

#[test]
fn malformed_data_is_a_decode_error() {
    let body = json!({ "data": { "nope": true } });
    let err = unwrap_envelope::<Vec<Product>>(200, &body).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn without_a_browser_every_call_is_a_network_error() {
    let err =
        futures::executor::block_on(get::<serde_json::Value>("/products/public")).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
