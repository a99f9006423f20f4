//! Route guard for protected views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Renders its children only while the session is authenticated; otherwise
/// redirects to `/login`. The check is a synchronous read of the auth
/// slice — there is no grace period for an in-flight verify.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !auth.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || auth.get().is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}
