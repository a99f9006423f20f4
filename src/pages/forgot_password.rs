//! Request a password-reset email.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::Toasts;
use crate::state::auth::{self, AuthState};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let _toasts = expect_context::<Toasts>();
    let _navigate = use_navigate();

    let email = RwSignal::new(String::new());

    on_cleanup(move || auth::clear_error(auth));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            use leptos::task::spawn_local;
            use leptos_router::NavigateOptions;

            use crate::components::toast::{ToastKind, show_toast};

            let navigate = _navigate.clone();
            auth::forgot_password(auth, email.get_untracked(), move |result| {
                if result.is_ok() {
                    show_toast(
                        _toasts,
                        "Email de reseteo enviado. Revisa tu casilla.",
                        ToastKind::Success,
                    );
                    // Leave the toast on screen for a beat before routing.
                    spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(2_000)).await;
                        navigate("/login", NavigateOptions::default());
                    });
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <span class="auth-card__icon">"✉️"</span>
                    <h2>"Recuperar Contraseña"</h2>
                    <p>"Ingresá el email asociado a tu cuenta"</p>
                </div>

                {move || {
                    auth.get()
                        .error
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

                    <button
                        type="submit"
                        class="btn btn--primary auth-form__submit"
                        disabled=move || auth.get().loading
                    >
                        {move || {
                            if auth.get().loading {
                                "Enviando..."
                            } else {
                                "Enviar email de recuperación"
                            }
                        }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    <a href="/login">"← Volver al inicio de sesión"</a>
                </p>
            </div>
        </div>
    }
}
