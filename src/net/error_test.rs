use super::*;

#[test]
fn server_message_is_preserved_verbatim() {
    let err = ApiError::Api { status: 400, message: Some("El nombre es obligatorio".to_owned()) };
    assert_eq!(err.user_message("Error al crear producto"), "El nombre es obligatorio");
}

#[test]
fn missing_message_falls_back_to_operation_phrase() {
    let err = ApiError::Api { status: 500, message: None };
    assert_eq!(err.user_message("Error al crear producto"), "Error al crear producto");
}

#[test]
fn network_and_decode_use_fallback() {
    assert_eq!(
        ApiError::Network("timeout".to_owned()).user_message("Error al obtener productos"),
        "Error al obtener productos"
    );
    assert_eq!(
        ApiError::Decode("bad json".to_owned()).user_message("Error al obtener productos"),
        "Error al obtener productos"
    );
}

#[test]
fn unauthorized_uses_fallback() {
    assert_eq!(ApiError::Unauthorized.user_message("Error"), "Error");
}
