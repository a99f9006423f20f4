//! Auth slice: session state, its reducer, and the session operations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{SessionData, User};
use crate::state::credentials;
use crate::state::op::{Lifecycle, Reduce};

/// Session state. `token` and `user` move together: a 401, a failed verify
/// or a logout clears both atomically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state, hydrated from the credential store at process start.
    pub fn from_credentials() -> Self {
        let (token, user) = match credentials::load() {
            Some((token, user)) => (Some(token), Some(user)),
            None => (None, None),
        };
        Self { token, user, loading: false, error: None }
    }

    /// Authenticated iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session operations, each carrying its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    Login(Lifecycle<SessionData>),
    Register(Lifecycle<()>),
    /// Forgot-password and reset-password share one identity: both only
    /// touch `loading`/`error`.
    PasswordReset(Lifecycle<()>),
    Verify(Lifecycle<User>),
    Logout,
    ClearError,
}

impl Reduce for AuthState {
    type Event = AuthEvent;

    fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::Login(Lifecycle::Pending)
            | AuthEvent::Register(Lifecycle::Pending)
            | AuthEvent::PasswordReset(Lifecycle::Pending)
            | AuthEvent::Verify(Lifecycle::Pending) => {
                self.loading = true;
                self.error = None;
            }
            AuthEvent::Login(Lifecycle::Fulfilled(session)) => {
                self.loading = false;
                self.token = Some(session.token);
                self.user = Some(session.user);
            }
            // Registration does not log the user in; the view routes to the
            // login form instead.
            AuthEvent::Register(Lifecycle::Fulfilled(()))
            | AuthEvent::PasswordReset(Lifecycle::Fulfilled(())) => {
                self.loading = false;
            }
            AuthEvent::Login(Lifecycle::Rejected(message))
            | AuthEvent::Register(Lifecycle::Rejected(message))
            | AuthEvent::PasswordReset(Lifecycle::Rejected(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
            AuthEvent::Verify(Lifecycle::Fulfilled(user)) => {
                self.loading = false;
                self.user = Some(user);
            }
            // The stored token is stale; drop the session without surfacing
            // an error, the user simply sees the login screen.
            AuthEvent::Verify(Lifecycle::Rejected(_)) => {
                self.loading = false;
                self.token = None;
                self.user = None;
            }
            AuthEvent::Logout => {
                self.token = None;
                self.user = None;
                self.loading = false;
                self.error = None;
            }
            AuthEvent::ClearError => {
                self.error = None;
            }
        }
    }
}

/// Synchronous logout: clears the credential store and the slice.
pub fn logout(auth: leptos::prelude::RwSignal<AuthState>) {
    use leptos::prelude::Update;

    credentials::clear();
    auth.update(|s| s.apply(AuthEvent::Logout));
}

/// Clear the last session-operation error.
pub fn clear_error(auth: leptos::prelude::RwSignal<AuthState>) {
    use leptos::prelude::Update;

    auth.update(|s| s.apply(AuthEvent::ClearError));
}

#[cfg(feature = "csr")]
pub use ops::*;

#[cfg(feature = "csr")]
mod ops {
    use leptos::prelude::RwSignal;

    use super::{AuthEvent, AuthState};
    use crate::net;
    use crate::state::credentials;
    use crate::state::op::{self, Lifecycle};

    /// Log in. On fulfilled the session is persisted before the state
    /// change is applied.
    pub fn login(auth: RwSignal<AuthState>, email: String, password: String) {
        op::dispatch(
            auth,
            "Error al iniciar sesión",
            async move {
                let session = net::auth::login(&email, &password).await?;
                credentials::save(&session.token, &session.user);
                Ok(session)
            },
            AuthEvent::Login,
        );
    }

    /// Register a new account. Does not auto-login; `on_done` lets the view
    /// confirm and route to the login form.
    pub fn register(
        auth: RwSignal<AuthState>,
        nombre: String,
        email: String,
        password: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            auth,
            "Error al registrarse",
            async move {
                net::auth::register(&nombre, &email, &password).await?;
                Ok(())
            },
            AuthEvent::Register,
            on_done,
        );
    }

    /// Validate the stored token at process start and hydrate `user`.
    /// Any rejection drops the persisted session.
    pub fn verify_token(auth: RwSignal<AuthState>) {
        op::dispatch(
            auth,
            "Error al verificar sesión",
            async move {
                match net::auth::verify().await {
                    Ok(user) => {
                        // Keep the persisted record in sync with the server.
                        if let Some(token) = credentials::token() {
                            credentials::save(&token, &user);
                        }
                        Ok(user)
                    }
                    Err(err) => {
                        credentials::clear();
                        Err(err)
                    }
                }
            },
            AuthEvent::Verify,
        );
    }

    /// Request a password-reset email.
    pub fn forgot_password(
        auth: RwSignal<AuthState>,
        email: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            auth,
            "Error al enviar el correo",
            async move {
                net::auth::forgot_password(&email).await?;
                Ok(())
            },
            AuthEvent::PasswordReset,
            on_done,
        );
    }

    /// Set a new password using an emailed reset token.
    pub fn reset_password(
        auth: RwSignal<AuthState>,
        token: String,
        password: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            auth,
            "Error al restablecer la contraseña",
            async move {
                net::auth::reset_password(&token, &password).await?;
                Ok(())
            },
            AuthEvent::PasswordReset,
            on_done,
        );
    }
}
