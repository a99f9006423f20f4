//! Read-only profile card for the signed-in user.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="profile">
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <p>"No hay información de perfil."</p>
                        <a href="/">"Volver al inicio"</a>
                    }
                }
            >
                <h1>"Mi perfil"</h1>
                <div class="profile__card">
                    <p>
                        <strong>"Nombre: "</strong>
                        {move || {
                            auth.get().user.and_then(|u| u.nombre).unwrap_or_default()
                        }}
                    </p>
                    <p>
                        <strong>"Email: "</strong>
                        {move || auth.get().user.map(|u| u.email).unwrap_or_default()}
                    </p>
                    <p>
                        <strong>"Rol: "</strong>
                        {move || auth.get().user.map(|u| u.rol).unwrap_or_default()}
                    </p>
                    <a href="/dashboard">"Volver al dashboard"</a>
                </div>
            </Show>
        </div>
    }
}
