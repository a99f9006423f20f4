//! Identity-provider callback. The provider redirects here with either a
//! signed bearer token or an error code in the query string.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::SessionData;
use crate::state::auth::{AuthEvent, AuthState};
use crate::state::credentials;
use crate::state::op::{Lifecycle, Reduce};
use crate::util::jwt;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    Effect::new(move || {
        let (token, error) = query.with(|q| (q.get("token"), q.get("error")));

        if let Some(code) = error {
            log::error!("fallo de autenticación externa: {code}");
            navigate(&format!("/login?error={code}"), NavigateOptions::default());
            return;
        }

        let Some(token) = token else {
            navigate("/login", NavigateOptions::default());
            return;
        };

        match jwt::decode_user(&token) {
            Ok(user) => {
                credentials::save(&token, &user);
                auth.update(|s| {
                    s.apply(AuthEvent::Login(Lifecycle::Fulfilled(SessionData {
                        token: token.clone(),
                        user,
                    })));
                });
                navigate("/dashboard", NavigateOptions::default());
            }
            Err(err) => {
                log::error!("token de autenticación externa inválido: {err}");
                navigate("/login?error=invalid_token", NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--center">
                <h2>"Procesando autenticación..."</h2>
                <p>"Serás redirigido en un momento"</p>
            </div>
        </div>
    }
}
