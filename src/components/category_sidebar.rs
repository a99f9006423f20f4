//! Category sidebar with server-provided counts.

#[cfg(test)]
#[path = "category_sidebar_test.rs"]
mod category_sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::products::ProductsState;
use crate::util::uri::{decode_segment, encode_segment};

#[component]
pub fn CategorySidebar() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    // Counts come from the server; one fetch on mount is enough.
    #[cfg(feature = "csr")]
    crate::state::products::fetch_categories(products);

    // Callback is Copy, so the item closures below stay Fn.
    let on_select = Callback::new(move |category: String| {
        navigate(&category_route(&category), NavigateOptions::default());
    });

    view! {
        <aside class="sidebar">
            <h3 class="sidebar__title">"Categorías"</h3>
            <Show
                when=move || !products.get().categories_loading
                fallback=|| view! { <p class="sidebar__hint">"Cargando categorías..."</p> }
            >
                <ul class="sidebar__list">
                    {move || {
                        let state = products.get();
                        let active = params.with(|p| p.get("category"));
                        if state.categories.is_empty() {
                            return vec![
                                view! { <li class="sidebar__hint">"No hay categorías"</li> }
                                    .into_any(),
                            ];
                        }
                        state
                            .categories
                            .into_iter()
                            .map(|cat| {
                                let class = if is_active(active.as_deref(), &cat.category) {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                };
                                let name = cat.category.clone();
                                view! {
                                    <li>
                                        <button
                                            class=class
                                            on:click=move |_| on_select.run(name.clone())
                                        >
                                            <span class="sidebar__name">{cat.category}</span>
                                            <span class="sidebar__count">{cat.count}</span>
                                        </button>
                                    </li>
                                }
                                .into_any()
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </aside>
    }
}

/// Route for a category, with the free-form name encoded as one segment.
fn category_route(category: &str) -> String {
    format!("/category/{}", encode_segment(category))
}

/// Whether the route param (still percent-encoded) names this category.
fn is_active(param: Option<&str>, category: &str) -> bool {
    param.is_some_and(|raw| decode_segment(raw) == category)
}
