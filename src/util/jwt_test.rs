use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn make_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.firma")
}

#[test]
fn decodes_id_email_and_rol() {
    let token = make_token(r#"{"id":"u","email":"e@x.c","rol":"admin","iat":123}"#);
    let user = decode_user(&token).unwrap();
    assert_eq!(user.id, "u");
    assert_eq!(user.email, "e@x.c");
    assert_eq!(user.rol, "admin");
    assert!(user.nombre.is_none());
}

#[test]
fn accepts_padded_base64() {
    let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"id":"u","email":"e","rol":"r"}"#);
    let token = format!("h.{body}.s");
    assert!(decode_user(&token).is_ok());
}

#[test]
fn token_without_segments_is_a_decode_error() {
    assert!(matches!(decode_user("garbage"), Err(ApiError::Decode(_))));
}

#[test]
fn invalid_base64_is_a_decode_error() {
    assert!(matches!(decode_user("h.!!!.s"), Err(ApiError::Decode(_))));
}

#[test]
fn payload_missing_claims_is_a_decode_error() {
    let token = make_token(r#"{"id":"u"}"#);
    assert!(matches!(decode_user(&token), Err(ApiError::Decode(_))));
}

#[test]
fn payload_that_is_not_json_is_a_decode_error() {
    let token = make_token("not-json");
    assert!(matches!(decode_user(&token), Err(ApiError::Decode(_))));
}
