//! Delete-confirmation dialog offering soft (baja lógica) and hard
//! (baja física) delete.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    /// Product name shown in the prompt.
    nombre: String,
    on_soft: Callback<()>,
    on_hard: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Eliminar producto"</h2>
                <p class="dialog__text">
                    "¿Qué querés hacer con " <strong>{nombre}</strong> "?"
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--warning" on:click=move |_| on_soft.run(())>
                        "Ocultar (baja lógica)"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_hard.run(())>
                        "Eliminar definitivamente"
                    </button>
                </div>
            </div>
        </div>
    }
}
