//! Administration table over the full catalog, hidden products included.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::products::ProductsState;

#[component]
pub fn ProductList(
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
    on_toggle_status: Callback<String>,
    on_toggle_promotion: Callback<String>,
) -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();

    view! {
        <div class="product-table">
            <Show
                when=move || !products.get().loading
                fallback=|| view! { <p class="product-table__hint">"Cargando productos..."</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Producto"</th>
                            <th>"Categoría"</th>
                            <th>"Precio"</th>
                            <th>"Stock"</th>
                            <th>"Estado"</th>
                            <th>"Promoción"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .items
                                .into_iter()
                                .map(|product| {
                                    view! {
                                        <ProductRow
                                            product=product
                                            on_edit=on_edit
                                            on_delete=on_delete
                                            on_toggle_status=on_toggle_status
                                            on_toggle_promotion=on_toggle_promotion
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn ProductRow(
    product: Product,
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
    on_toggle_status: Callback<String>,
    on_toggle_promotion: Callback<String>,
) -> impl IntoView {
    let categoria = product.display_categoria().to_owned();
    let id = product.id.clone();
    let id_promo = product.id.clone();
    let estado = if product.activo { "Visible" } else { "Oculto" };
    let estado_class =
        if product.activo { "tag tag--active" } else { "tag tag--inactive" };
    let promo = if product.promocion.as_ref().is_some_and(|p| p.activa) {
        if product.promocion_vigente { "Vigente" } else { "Programada" }
    } else {
        "—"
    };
    let edit_product = product.clone();
    let delete_product = product.clone();

    view! {
        <tr>
            <td>{product.nombre.clone()}</td>
            <td>{categoria}</td>
            <td>{format!("${:.2}", product.precio)}</td>
            <td>{product.stock}</td>
            <td>
                <button class=estado_class on:click=move |_| on_toggle_status.run(id.clone())>
                    {estado}
                </button>
            </td>
            <td>
                <button
                    class="tag tag--promo"
                    on:click=move |_| on_toggle_promotion.run(id_promo.clone())
                >
                    {promo}
                </button>
            </td>
            <td class="product-table__actions">
                <button class="btn" on:click=move |_| on_edit.run(edit_product.clone())>
                    "Editar"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(delete_product.clone())
                >
                    "Eliminar"
                </button>
            </td>
        </tr>
    }
}
