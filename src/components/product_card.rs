//! Public catalog card for one product.

use leptos::prelude::*;

use crate::net::types::{Product, PromoTipo};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let categoria = product.display_categoria().to_owned();
    let precio_final = product.precio_final();
    let en_promocion = product.promocion_vigente;
    let precio = product.precio;
    let nombre = product.nombre;
    let descripcion = product.descripcion;
    let imagen = product.imagen;
    let stock = product.stock;

    let badge = product.promocion.filter(|_| en_promocion).map(|promo| {
        let label = match promo.tipo {
            PromoTipo::Porcentaje => format!("-{}%", promo.valor),
            PromoTipo::MontoFijo => format!("-${}", promo.valor),
        };
        view! { <span class="product-card__badge">{label}</span> }
    });

    let media = if imagen.is_empty() {
        view! { <div class="product-card__placeholder">"📦"</div> }.into_any()
    } else {
        view! { <img src=imagen alt=nombre.clone()/> }.into_any()
    };

    let pricing = if en_promocion {
        view! {
            <span class="product-card__price product-card__price--old">
                {format!("${precio:.2}")}
            </span>
            <span class="product-card__price product-card__price--promo">
                {format!("${precio_final:.2}")}
            </span>
        }
        .into_any()
    } else {
        view! { <span class="product-card__price">{format!("${precio:.2}")}</span> }.into_any()
    };

    let stock_label = if stock > 0 { format!("Stock: {stock}") } else { "Sin stock".to_owned() };

    view! {
        <article class="product-card">
            <div class="product-card__media">{badge} {media}</div>

            <div class="product-card__body">
                <span class="product-card__category">{categoria}</span>
                <h3 class="product-card__name">{nombre}</h3>
                <p class="product-card__description">{descripcion}</p>
                <div class="product-card__pricing">{pricing}</div>
                <span class="product-card__stock">{stock_label}</span>
            </div>
        </article>
    }
}
