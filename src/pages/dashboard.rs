//! Administration panel: catalog stats, the product table and the
//! create/edit/delete flows.

use leptos::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::product_form::ProductForm;
use crate::components::product_list::ProductList;
use crate::components::toast::Toasts;
use crate::net::types::Product;
use crate::state::auth::AuthState;
use crate::state::products::ProductsState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let products = expect_context::<RwSignal<ProductsState>>();
    let _toasts = expect_context::<Toasts>();

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Product>);
    let to_delete = RwSignal::new(None::<Product>);

    #[cfg(feature = "csr")]
    crate::state::products::fetch_all(products);

    let on_create = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |product: Product| {
        editing.set(Some(product));
        show_form.set(true);
    });

    let on_cancel = Callback::new(move |()| {
        show_form.set(false);
        editing.set(None);
    });

    let on_delete = Callback::new(move |product: Product| {
        to_delete.set(Some(product));
    });

    let on_submit = Callback::new(move |_data: serde_json::Value| {
        #[cfg(feature = "csr")]
        {
            use crate::components::toast::{ToastKind, show_toast};

            let after = move |label: &'static str| {
                move |result: Result<(), String>| match result {
                    Ok(()) => {
                        show_form.set(false);
                        editing.set(None);
                        show_toast(_toasts, label, ToastKind::Success);
                        crate::state::products::fetch_all(products);
                    }
                    // The slice keeps the message; the inline banner shows it.
                    Err(_) => {}
                }
            };
            match editing.get_untracked() {
                Some(product) => crate::state::products::update(
                    products,
                    product.id,
                    _data,
                    after("Producto actualizado correctamente"),
                ),
                None => crate::state::products::create(
                    products,
                    _data,
                    after("Producto creado correctamente"),
                ),
            }
        }
    });

    let confirm_delete = move |permanent: bool| {
        #[cfg(feature = "csr")]
        if let Some(product) = to_delete.get_untracked() {
            use crate::components::toast::{ToastKind, show_toast};

            let done = move |result: Result<(), String>| {
                to_delete.set(None);
                match result {
                    Ok(()) => {
                        show_toast(_toasts, "Producto eliminado correctamente", ToastKind::Success);
                        crate::state::products::fetch_all(products);
                    }
                    Err(message) => show_toast(_toasts, message, ToastKind::Error),
                }
            };
            if permanent {
                crate::state::products::delete_permanent(products, product.id, done);
            } else {
                crate::state::products::delete(products, product.id, done);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = permanent;
    };

    let on_toggle_status = Callback::new(move |_id: String| {
        #[cfg(feature = "csr")]
        {
            use crate::components::toast::{ToastKind, show_toast};

            crate::state::products::toggle_status(products, _id, move |result| match result {
                Ok(()) => {
                    show_toast(_toasts, "Estado del producto actualizado", ToastKind::Success);
                }
                Err(message) => show_toast(_toasts, message, ToastKind::Error),
            });
        }
    });

    let on_toggle_promotion = Callback::new(move |_id: String| {
        #[cfg(feature = "csr")]
        {
            use crate::components::toast::{ToastKind, show_toast};

            crate::state::products::toggle_promotion(products, _id, move |result| match result {
                Ok(()) => {
                    show_toast(_toasts, "Estado de promoción actualizado", ToastKind::Success);
                    crate::state::products::fetch_all(products);
                }
                Err(message) => show_toast(_toasts, message, ToastKind::Error),
            });
        }
    });

    let stats = move || {
        let items = products.get().items;
        let total = items.len();
        let activos = items.iter().filter(|p| p.activo).count();
        let en_promocion = items
            .iter()
            .filter(|p| p.promocion.as_ref().is_some_and(|promo| promo.activa) && p.promocion_vigente)
            .count();
        (total, activos, en_promocion, total - activos)
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"🎛️ Panel de Administración"</h1>
                <p>
                    "Bienvenido, "
                    <strong>
                        {move || {
                            auth.get().user.and_then(|u| u.nombre).unwrap_or_default()
                        }}
                    </strong>
                </p>
            </header>

            <div class="stats">
                <div class="stats__card stats__card--blue">
                    <p class="stats__label">"Total Productos"</p>
                    <p class="stats__value">{move || stats().0}</p>
                    <span class="stats__icon">"📦"</span>
                </div>
                <div class="stats__card stats__card--green">
                    <p class="stats__label">"Activos"</p>
                    <p class="stats__value">{move || stats().1}</p>
                    <span class="stats__icon">"✅"</span>
                </div>
                <div class="stats__card stats__card--red">
                    <p class="stats__label">"En Promoción"</p>
                    <p class="stats__value">{move || stats().2}</p>
                    <span class="stats__icon">"🎉"</span>
                </div>
                <div class="stats__card stats__card--purple">
                    <p class="stats__label">"Inactivos"</p>
                    <p class="stats__value">{move || stats().3}</p>
                    <span class="stats__icon">"💤"</span>
                </div>
            </div>

            {move || {
                products
                    .get()
                    .error
                    .map(|msg| view! { <div class="banner banner--error">"❌ " {msg}</div> })
            }}

            <Show when=move || !show_form.get()>
                <div class="dashboard__actions">
                    <button class="btn btn--primary" on:click=on_create>
                        "➕ Crear Nuevo Producto"
                    </button>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <ProductForm
                    product=editing.get()
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            </Show>

            <ProductList
                on_edit=on_edit
                on_delete=on_delete
                on_toggle_status=on_toggle_status
                on_toggle_promotion=on_toggle_promotion
            />

            <Show when=move || to_delete.get().is_some()>
                <ConfirmModal
                    nombre=to_delete.get().map(|p| p.nombre).unwrap_or_default()
                    on_soft=Callback::new(move |()| confirm_delete(false))
                    on_hard=Callback::new(move |()| confirm_delete(true))
                    on_cancel=Callback::new(move |()| to_delete.set(None))
                />
            </Show>
        </div>
    }
}
