//! Account registration. A fulfilled registration routes to the login
//! form; it never auto-logs-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::Toasts;
use crate::state::auth::{self, AuthState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let _toasts = expect_context::<Toasts>();
    let _navigate = use_navigate();

    let nombre = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
            use leptos_router::NavigateOptions;

            use crate::components::toast::{ToastKind, show_toast};

            let navigate = _navigate.clone();
            auth::register(
                auth,
                nombre.get_untracked(),
                email.get_untracked(),
                pw,
                move |result| {
                    if result.is_ok() {
                        show_toast(
                            _toasts,
                            "Registro exitoso. Por favor inicia sesión.",
                            ToastKind::Success,
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                },
            );
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <span class="auth-card__icon">"📝"</span>
                    <h2>"Crear Cuenta"</h2>
                    <p>"Registrate en MiniShop y empezá a comprar"</p>
                </div>

                {move || {
                    auth.get()
                        .error
                        .or_else(|| validation_error.get())
                        .map(|msg| view! { <div class="banner banner--error">"❌ " {msg}</div> })
                }}

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__field">
                        "👤 Nombre Completo"
                        <input
                            type="text"
                            required
                            minlength="3"
                            placeholder="Juan Pérez"
                            prop:value=move || nombre.get()
                            on:input=move |ev| nombre.set(event_target_value(&ev))
                        />
                    </label>

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
                            minlength="6"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <small>"Mínimo 6 caracteres"</small>
                    </label>

                    <label class="auth-form__field">
                        "✅ Confirmar Contraseña"
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
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
                            if auth.get().loading { "Registrando..." } else { "Crear Cuenta" }
                        }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "¿Ya tenés cuenta? " <a href="/login">"Iniciá sesión aquí"</a>
                </p>
            </div>
        </div>
    }
}
