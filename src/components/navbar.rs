//! Top navigation bar: brand, route-aware "Inicio", session links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toast::{ToastKind, Toasts, show_toast};
use crate::state::auth::{self, AuthState};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let location = use_location();

    let inicio_class = move || {
        let path = location.pathname.get();
        if path == "/" || path.starts_with("/category/") {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    let on_logout = move |_| {
        auth::logout(auth);
        show_toast(toasts, "Ha cerrado sesión correctamente", ToastKind::Success);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "🛒 MiniShop"
                </a>

                <div class="navbar__links">
                    <a href="/" class=inicio_class>
                        "Inicio"
                    </a>

                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login" class="navbar__link">
                                    "Iniciar Sesión"
                                </a>
                                <a href="/register" class="navbar__cta">
                                    "Registrarse"
                                </a>
                            }
                        }
                    >
                        <a href="/dashboard" class="navbar__link">
                            "Dashboard"
                        </a>
                        <span class="navbar__user">
                            "👤 "
                            {move || {
                                auth.get().user.and_then(|u| u.nombre).unwrap_or_default()
                            }}
                        </span>
                        <a href="/profile" class="navbar__link">
                            "Ver mi perfil"
                        </a>
                        <button class="navbar__logout" on:click=on_logout.clone()>
                            "Cerrar Sesión"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
