//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::components::toast::{Toast, ToastHost};
use crate::pages::auth_callback::AuthCallbackPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::state::auth::AuthState;
use crate::state::products::ProductsState;

/// Root application component.
///
/// Provides the auth and products slices plus the toast channel, restores
/// a persisted session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_credentials());
    let products = RwSignal::new(ProductsState::default());
    let toasts = RwSignal::new(Vec::<Toast>::new());

    provide_context(auth);
    provide_context(products);
    provide_context(toasts);

    // Revalidate a persisted token against the server on startup.
    #[cfg(feature = "csr")]
    if crate::state::credentials::token().is_some() {
        crate::state::auth::verify_token(auth);
    }

    view! {
        <Stylesheet id="leptos" href="/style/main.css"/>
        <Title text="MiniShop"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("category"), ParamSegment("category"))
                        view=HomePage
                    />
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route
                        path=(StaticSegment("reset-password"), ParamSegment("token"))
                        view=ResetPasswordPage
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("callback"))
                        view=AuthCallbackPage
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <DashboardPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProfilePage/>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
