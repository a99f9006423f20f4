//! Create/edit product form.
//!
//! Field values stay as raw strings until submit; the submit handler
//! coerces them into the JSON payload the server expects. Unparsable
//! numbers never get this far because validation blocks the submit.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use leptos::prelude::*;
use serde_json::{Value, json};

use crate::net::types::{Product, PromoTipo};

#[component]
pub fn ProductForm(
    /// `Some` when editing an existing product, `None` when creating.
    product: Option<Product>,
    on_submit: Callback<Value>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = product.is_some();

    let nombre = RwSignal::new(String::new());
    let descripcion = RwSignal::new(String::new());
    let precio = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let categoria = RwSignal::new(String::new());
    let imagen = RwSignal::new(String::new());
    let activo = RwSignal::new(true);

    let promo_activa = RwSignal::new(false);
    let promo_tipo = RwSignal::new("porcentaje".to_owned());
    let promo_valor = RwSignal::new("0".to_owned());
    let promo_inicio = RwSignal::new(String::new());
    let promo_fin = RwSignal::new(String::new());

    let error = RwSignal::new(None::<String>);

    if let Some(p) = product {
        nombre.set(p.nombre);
        descripcion.set(p.descripcion);
        precio.set(format_number(p.precio));
        stock.set(p.stock.to_string());
        categoria.set(p.categoria);
        imagen.set(p.imagen);
        activo.set(p.activo);
        if let Some(promo) = p.promocion {
            promo_activa.set(promo.activa);
            promo_tipo.set(
                match promo.tipo {
                    PromoTipo::Porcentaje => "porcentaje",
                    PromoTipo::MontoFijo => "monto_fijo",
                }
                .to_owned(),
            );
            promo_valor.set(format_number(promo.valor));
            promo_inicio.set(promo.fecha_inicio.as_deref().map(datetime_local).unwrap_or_default());
            promo_fin.set(promo.fecha_fin.as_deref().map(datetime_local).unwrap_or_default());
        }
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match validate(
            &nombre.get_untracked(),
            &descripcion.get_untracked(),
            &precio.get_untracked(),
            &stock.get_untracked(),
            promo_activa.get_untracked(),
            &promo_tipo.get_untracked(),
            &promo_valor.get_untracked(),
        ) {
            Err(message) => error.set(Some(message)),
            Ok((precio_num, stock_num, valor_num)) => {
                error.set(None);
                let data = json!({
                    "nombre": nombre.get_untracked(),
                    "descripcion": descripcion.get_untracked(),
                    "precio": precio_num,
                    "stock": stock_num,
                    "categoria": categoria.get_untracked(),
                    "imagen": imagen.get_untracked(),
                    "activo": activo.get_untracked(),
                    "promocion": {
                        "activa": promo_activa.get_untracked(),
                        "tipo": promo_tipo.get_untracked(),
                        "valor": valor_num,
                        "fechaInicio": nonempty(&promo_inicio.get_untracked()),
                        "fechaFin": nonempty(&promo_fin.get_untracked()),
                    },
                });
                on_submit.run(data);
            }
        }
    };

    view! {
        <form class="product-form" on:submit=submit>
            <h3 class="product-form__title">
                {if editing { "✏️ Editar Producto" } else { "➕ Nuevo Producto" }}
            </h3>

            {move || {
                error.get().map(|msg| view! { <p class="product-form__error">{msg}</p> })
            }}

            <label class="product-form__field">
                "Nombre del Producto *"
                <input
                    type="text"
                    placeholder="Ej: Notebook Lenovo IdeaPad"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
            </label>

            <label class="product-form__field">
                "Descripción *"
                <textarea
                    rows="3"
                    placeholder="Describe las características del producto..."
                    prop:value=move || descripcion.get()
                    on:input=move |ev| descripcion.set(event_target_value(&ev))
                />
            </label>

            <div class="product-form__row">
                <label class="product-form__field">
                    "Precio ($) *"
                    <input
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || precio.get()
                        on:input=move |ev| precio.set(event_target_value(&ev))
                    />
                </label>
                <label class="product-form__field">
                    "Stock *"
                    <input
                        type="number"
                        placeholder="0"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="product-form__row">
                <label class="product-form__field">
                    "Categoría"
                    <input
                        type="text"
                        placeholder="Ej: Electrónica"
                        prop:value=move || categoria.get()
                        on:input=move |ev| categoria.set(event_target_value(&ev))
                    />
                </label>
                <label class="product-form__field">
                    "URL de Imagen"
                    <input
                        type="url"
                        placeholder="https://ejemplo.com/imagen.jpg"
                        prop:value=move || imagen.get()
                        on:input=move |ev| imagen.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <label class="product-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || activo.get()
                    on:change=move |ev| activo.set(event_target_checked(&ev))
                />
                "Producto activo (visible en la tienda)"
            </label>

            <fieldset class="product-form__promo">
                <legend>"🎉 Promoción"</legend>

                <label class="product-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || promo_activa.get()
                        on:change=move |ev| promo_activa.set(event_target_checked(&ev))
                    />
                    "Activar promoción para este producto"
                </label>

                <Show when=move || promo_activa.get()>
                    <div class="product-form__row">
                        <label class="product-form__field">
                            "Tipo de Descuento"
                            <select
                                prop:value=move || promo_tipo.get()
                                on:change=move |ev| promo_tipo.set(event_target_value(&ev))
                            >
                                <option value="porcentaje">"Porcentaje (%)"</option>
                                <option value="monto_fijo">"Monto Fijo ($)"</option>
                            </select>
                        </label>
                        <label class="product-form__field">
                            {move || {
                                if promo_tipo.get() == "porcentaje" {
                                    "Valor del Descuento (%)"
                                } else {
                                    "Valor del Descuento ($)"
                                }
                            }}
                            <input
                                type="number"
                                step="0.01"
                                prop:value=move || promo_valor.get()
                                on:input=move |ev| promo_valor.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="product-form__row">
                        <label class="product-form__field">
                            "Fecha de Inicio"
                            <input
                                type="datetime-local"
                                prop:value=move || promo_inicio.get()
                                on:input=move |ev| promo_inicio.set(event_target_value(&ev))
                            />
                            <small>"Dejar vacío para inicio inmediato"</small>
                        </label>
                        <label class="product-form__field">
                            "Fecha de Fin"
                            <input
                                type="datetime-local"
                                prop:value=move || promo_fin.get()
                                on:input=move |ev| promo_fin.set(event_target_value(&ev))
                            />
                            <small>"Dejar vacío para promoción indefinida"</small>
                        </label>
                    </div>
                </Show>
            </fieldset>

            <div class="product-form__actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button type="submit" class="btn btn--primary">
                    {if editing { "Actualizar" } else { "Crear Producto" }}
                </button>
            </div>
        </form>
    }
}

/// Checks required fields and numeric ranges; returns the parsed numbers.
fn validate(
    nombre: &str,
    descripcion: &str,
    precio: &str,
    stock: &str,
    promo_activa: bool,
    promo_tipo: &str,
    promo_valor: &str,
) -> Result<(f64, u32, f64), String> {
    // Limits count characters, not bytes; names and descriptions carry
    // accented Spanish.
    let nombre = nombre.trim();
    if !(3..=100).contains(&nombre.chars().count()) {
        return Err("El nombre debe tener entre 3 y 100 caracteres".to_owned());
    }
    let descripcion = descripcion.trim();
    if !(10..=500).contains(&descripcion.chars().count()) {
        return Err("La descripción debe tener entre 10 y 500 caracteres".to_owned());
    }

    let precio: f64 = precio
        .trim()
        .parse()
        .map_err(|_| "El precio es obligatorio".to_owned())?;
    if precio < 0.0 {
        return Err("El precio no puede ser negativo".to_owned());
    }

    let stock: u32 = stock
        .trim()
        .parse()
        .map_err(|_| "El stock es obligatorio y no puede ser negativo".to_owned())?;

    let valor: f64 = promo_valor.trim().parse().unwrap_or(0.0);
    if promo_activa {
        if valor < 0.0 {
            return Err("El valor del descuento no puede ser negativo".to_owned());
        }
        if promo_tipo == "porcentaje" && valor > 100.0 {
            return Err("El porcentaje no puede superar 100%".to_owned());
        }
    }

    Ok((precio, stock, valor))
}

/// Empty strings become JSON null; the server treats null dates as open ends.
fn nonempty(value: &str) -> Value {
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_owned())
    }
}

/// Render a float without a trailing `.0` when it is integral, so the
/// numeric inputs show "100" rather than "100.0".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Truncate an ISO-8601 timestamp to the `datetime-local` input format.
fn datetime_local(iso: &str) -> String {
    iso.chars().take(16).collect()
}
