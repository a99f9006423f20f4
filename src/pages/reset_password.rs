//! Set a new password using the token from the reset email link.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::toast::Toasts;
use crate::state::auth::{self, AuthState};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let _toasts = expect_context::<Toasts>();
    let _navigate = use_navigate();
    let _params = use_params_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let validation_error = RwSignal::new(None::<String>);

    on_cleanup(move || auth::clear_error(auth));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let pw = password.get_untracked();
        if pw != confirm.get_untracked() {
            validation_error.set(Some("Las contraseñas no coinciden".to_owned()));
            return;
        }
        if pw.len() < 6 {
            validation_error.set(Some("La contraseña debe tener al menos 6 caracteres".to_owned()));
            return;
        }
        validation_error.set(None);

        #[cfg(feature = "csr")]
        {
            use leptos::task::spawn_local;
            use leptos_router::NavigateOptions;

            use crate::components::toast::{ToastKind, show_toast};

            let token = _params.with_untracked(|p| p.get("token")).unwrap_or_default();
            let navigate = _navigate.clone();
            auth::reset_password(auth, token, pw, move |result| {
                if result.is_ok() {
                    show_toast(_toasts, "Contraseña actualizada correctamente", ToastKind::Success);
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
                    <span class="auth-card__icon">"🔑"</span>
                    <h2>"Nueva Contraseña"</h2>
                    <p>"Ingresá tu nueva contraseña"</p>
                </div>

                {move || {
                    auth.get()
                        .error
                        .or_else(|| validation_error.get())
                        .map(|msg| view! { <div class="banner banner--error">"❌ " {msg}</div> })
                }}

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__field">
                        "🔒 Nueva Contraseña"
                        <input
                            type="password"
                            required
                            minlength="6"
                            placeholder="Mínimo 6 caracteres"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__field">
                        "✅ Confirmar Contraseña"
                        <input
                            type="password"
                            required
                            placeholder="Repetí la contraseña"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        type="submit"
                        class="btn btn--primary auth-form__submit"
                        disabled=move || auth.get().loading
                    >
                        {move || {
                            if auth.get().loading {
                                "Actualizando..."
                            } else {
                                "Actualizar Contraseña"
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
