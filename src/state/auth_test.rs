use super::*;
use crate::state::op::terminal;
use crate::net::error::ApiError;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.c".to_owned(),
        nombre: Some("Ana".to_owned()),
        rol: "admin".to_owned(),
    }
}

fn session() -> SessionData {
    SessionData { token: "T".to_owned(), user: sample_user() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Login lifecycle
// =============================================================

#[test]
fn login_pending_sets_loading_and_clears_error() {
    let mut state = AuthState { error: Some("viejo".to_owned()), ..AuthState::default() };
    state.apply(AuthEvent::Login(Lifecycle::Pending));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn login_fulfilled_authenticates() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::Login(Lifecycle::Pending));
    state.apply(AuthEvent::Login(Lifecycle::Fulfilled(session())));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("T"));
    assert_eq!(state.user, Some(sample_user()));
}

#[test]
fn login_rejected_records_the_message() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::Login(Lifecycle::Pending));
    state.apply(AuthEvent::Login(terminal(
        Err(ApiError::Api { status: 400, message: Some("Credenciales inválidas".to_owned()) }),
        "Error al iniciar sesión",
    )));
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.error.as_deref(), Some("Credenciales inválidas"));
}

// =============================================================
// Register does not auto-login
// =============================================================

#[test]
fn register_fulfilled_leaves_session_absent() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::Register(Lifecycle::Pending));
    state.apply(AuthEvent::Register(Lifecycle::Fulfilled(())));
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

// =============================================================
// Verify
// =============================================================

#[test]
fn verify_fulfilled_hydrates_user_and_keeps_token() {
    let mut state = AuthState { token: Some("T".to_owned()), ..AuthState::default() };
    state.apply(AuthEvent::Verify(Lifecycle::Pending));
    state.apply(AuthEvent::Verify(Lifecycle::Fulfilled(sample_user())));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("T"));
    assert_eq!(state.user, Some(sample_user()));
}

#[test]
fn verify_pending_sets_loading_and_clears_error() {
    let mut state = AuthState {
        token: Some("T".to_owned()),
        error: Some("viejo".to_owned()),
        ..AuthState::default()
    };
    state.apply(AuthEvent::Verify(Lifecycle::Pending));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn verify_rejected_clears_the_session_silently() {
    let mut state = AuthState {
        token: Some("T".to_owned()),
        user: Some(sample_user()),
        ..AuthState::default()
    };
    state.apply(AuthEvent::Verify(Lifecycle::Rejected("expirado".to_owned())));
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
}

// =============================================================
// Logout / ClearError
// =============================================================

#[test]
fn logout_clears_token_and_user_atomically() {
    let mut state = AuthState {
        token: Some("T".to_owned()),
        user: Some(sample_user()),
        loading: true,
        error: Some("x".to_owned()),
    };
    state.apply(AuthEvent::Logout);
    assert_eq!(state, AuthState::default());
}

#[test]
fn clear_error_only_touches_error() {
    let mut state = AuthState {
        token: Some("T".to_owned()),
        user: Some(sample_user()),
        loading: false,
        error: Some("x".to_owned()),
    };
    state.apply(AuthEvent::ClearError);
    assert!(state.error.is_none());
    assert!(state.is_authenticated());
}

// =============================================================
// Hydration from the credential store
// =============================================================

#[test]
fn from_credentials_restores_a_saved_session() {
    crate::state::credentials::clear();
    crate::state::credentials::save("T", &sample_user());
    let state = AuthState::from_credentials();
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(sample_user()));
    crate::state::credentials::clear();
}

#[test]
fn from_credentials_with_empty_store_is_logged_out() {
    crate::state::credentials::clear();
    let state = AuthState::from_credentials();
    assert_eq!(state, AuthState::default());
}

// =============================================================
// Password reset lifecycle
// =============================================================

#[test]
fn password_reset_rejection_surfaces_the_error() {
    let mut state = AuthState::default();
    state.apply(AuthEvent::PasswordReset(Lifecycle::Pending));
    assert!(state.loading);
    state.apply(AuthEvent::PasswordReset(terminal(
        Err(ApiError::Api { status: 500, message: None }),
        "Error al enviar el correo",
    )));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Error al enviar el correo"));
}
