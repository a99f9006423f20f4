//! Password login form. Also the landing spot for IdP failures, which
//! arrive as `/login?error=...`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::{self, AuthState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // An authenticated user has no business here.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    // Leave stale errors behind when navigating away.
    on_cleanup(move || auth::clear_error(auth));

    let idp_error = move || {
        query.with(|q| q.get("error")).map(|code| match code.as_str() {
            "invalid_token" => "El token de autenticación no es válido".to_owned(),
            other => format!("Error de autenticación externa: {other}"),
        })
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        auth::login(auth, email.get_untracked(), password.get_untracked());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <span class="auth-card__icon">"🔐"</span>
                    <h2>"Bienvenido de nuevo"</h2>
                    <p>"Ingresá a tu cuenta de MiniShop"</p>
                </div>

                {move || {
                    auth.get()
                        .error
                        .or_else(idp_error)
                        .map(|msg| view! { <div class="banner banner--error">"❌ " {msg}</div> })
                }}

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__field">
                        "📧 Email"
                        <input
                            type="email"
                            required
                            placeholder="tu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__field">
                        "🔒 Contraseña"
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="auth-form__aside">
                        <a href="/forgot-password">"¿Olvidaste tu contraseña?"</a>
                    </div>

                    <button
                        type="submit"
                        class="btn btn--primary auth-form__submit"
                        disabled=move || auth.get().loading
                    >
                        {move || {
                            if auth.get().loading { "Iniciando sesión..." } else { "Iniciar Sesión" }
                        }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "¿No tenés cuenta? " <a href="/register">"Registrate aquí"</a>
                </p>
            </div>
        </div>
    }
}
