//! Public storefront: hero, feature highlights, category sidebar and the
//! product grid. Also serves `/category/:category`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::category_sidebar::CategorySidebar;
use crate::components::product_card::ProductCard;
use crate::state::products::ProductsState;
use crate::util::uri::decode_segment;

#[component]
pub fn HomePage() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let params = use_params_map();

    // Refetch whenever the category segment changes; no segment means the
    // full public catalog.
    Effect::new(move || {
        let category = params.with(|p| p.get("category"));
        #[cfg(feature = "csr")]
        match category {
            Some(name) => {
                crate::state::products::fetch_by_category(products, decode_segment(&name));
            }
            None => crate::state::products::fetch_public(products),
        }
        #[cfg(not(feature = "csr"))]
        let _ = category;
    });

    // Route segments arrive percent-encoded; category names may contain
    // spaces and accents.
    let heading = move || match params.with(|p| p.get("category")) {
        Some(name) => decode_segment(&name),
        None => "Todos los productos".to_owned(),
    };

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">"Bienvenido a MiniShop 🛒"</h1>
                <p class="hero__subtitle">"Los mejores productos al mejor precio"</p>
            </section>

            <section class="features">
                <div class="features__item">
                    <span class="features__icon">"🚚"</span>
                    <h3>"Envío rápido"</h3>
                    <p>"Recibí tu compra en 24/48 horas"</p>
                </div>
                <div class="features__item">
                    <span class="features__icon">"🔒"</span>
                    <h3>"Compra segura"</h3>
                    <p>"Tus datos siempre protegidos"</p>
                </div>
                <div class="features__item">
                    <span class="features__icon">"🎉"</span>
                    <h3>"Promociones"</h3>
                    <p>"Descuentos todas las semanas"</p>
                </div>
            </section>

            <div class="home__layout">
                <CategorySidebar/>

                <main class="home__main">
                    <h2 class="home__heading">{heading}</h2>

                    {move || {
                        products
                            .get()
                            .error
                            .map(|msg| view! { <div class="banner banner--error">"❌ " {msg}</div> })
                    }}

                    <Show
                        when=move || !products.get().loading
                        fallback=|| {
                            view! { <p class="home__hint">"Cargando productos..."</p> }
                        }
                    >
                        {move || {
                            let state = products.get();
                            if state.error.is_some() {
                                return ().into_any();
                            }
                            if state.items.is_empty() {
                                return view! {
                                    <p class="home__hint">"No hay productos disponibles"</p>
                                }
                                    .into_any();
                            }
                            view! {
                                <div class="product-grid">
                                    {state
                                        .items
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }}
                    </Show>
                </main>
            </div>
        </div>
    }
}
