//! Product slice: catalog state, its reducer, and the catalog operations.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::{Category, Product};
use crate::state::op::{Lifecycle, Reduce};

/// Catalog state. The `categories` axis has its own flags so a category
/// refresh never blanks the product grid and vice versa.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub categories: Vec<Category>,
    pub categories_loading: bool,
    pub categories_error: Option<String>,
}

/// Catalog operations, each carrying its lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductsEvent {
    FetchPublic(Lifecycle<Vec<Product>>),
    FetchPromotions(Lifecycle<Vec<Product>>),
    FetchAll(Lifecycle<Vec<Product>>),
    FetchByCategory(Lifecycle<Vec<Product>>),
    FetchCategories(Lifecycle<Vec<Category>>),
    Create(Lifecycle<Product>),
    Update(Lifecycle<Product>),
    /// Fulfilled carries the deleted id.
    Delete(Lifecycle<String>),
    DeletePermanent(Lifecycle<String>),
    TogglePromotion(Lifecycle<Product>),
}

impl Reduce for ProductsState {
    type Event = ProductsEvent;

    fn apply(&mut self, event: ProductsEvent) {
        match event {
            ProductsEvent::FetchPublic(lc)
            | ProductsEvent::FetchPromotions(lc)
            | ProductsEvent::FetchAll(lc)
            | ProductsEvent::FetchByCategory(lc) => self.apply_list_fetch(lc),

            ProductsEvent::FetchCategories(Lifecycle::Pending) => {
                self.categories_loading = true;
                self.categories_error = None;
            }
            ProductsEvent::FetchCategories(Lifecycle::Fulfilled(categories)) => {
                self.categories_loading = false;
                self.categories = categories;
            }
            ProductsEvent::FetchCategories(Lifecycle::Rejected(message)) => {
                self.categories_loading = false;
                self.categories_error = Some(message);
            }

            ProductsEvent::Create(Lifecycle::Pending)
            | ProductsEvent::Update(Lifecycle::Pending) => {
                self.loading = true;
                self.error = None;
            }
            // A freshly created product is shown first.
            ProductsEvent::Create(Lifecycle::Fulfilled(product)) => {
                self.loading = false;
                self.items.insert(0, product);
            }
            ProductsEvent::Update(Lifecycle::Fulfilled(product)) => {
                self.loading = false;
                self.replace_item(product);
            }
            ProductsEvent::Create(Lifecycle::Rejected(message))
            | ProductsEvent::Update(Lifecycle::Rejected(message)) => {
                self.loading = false;
                self.error = Some(message);
            }

            // Deletes and the promotion toggle never touch the global
            // loading flag; the grid must not show a full spinner for a
            // row-local change. Their rejections reach the caller through
            // the operation's `on_done`.
            ProductsEvent::Delete(Lifecycle::Fulfilled(id))
            | ProductsEvent::DeletePermanent(Lifecycle::Fulfilled(id)) => {
                self.items.retain(|item| item.id != id);
            }
            ProductsEvent::TogglePromotion(Lifecycle::Fulfilled(product)) => {
                self.replace_item(product);
            }
            ProductsEvent::Delete(_)
            | ProductsEvent::DeletePermanent(_)
            | ProductsEvent::TogglePromotion(_) => {}
        }
    }
}

impl ProductsState {
    fn apply_list_fetch(&mut self, lc: Lifecycle<Vec<Product>>) {
        match lc {
            Lifecycle::Pending => {
                self.loading = true;
                self.error = None;
            }
            Lifecycle::Fulfilled(items) => {
                self.loading = false;
                self.items = items;
            }
            Lifecycle::Rejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    /// Replace the element with the same `_id`, keeping its position.
    /// No-op when the id is not in the list.
    fn replace_item(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == product.id) {
            *existing = product;
        }
    }
}

#[cfg(feature = "csr")]
pub use ops::*;

#[cfg(feature = "csr")]
mod ops {
    use leptos::prelude::RwSignal;
    use serde_json::Value;

    use super::{ProductsEvent, ProductsState};
    use crate::net;
    use crate::state::op;

    pub fn fetch_public(products: RwSignal<ProductsState>) {
        op::dispatch(
            products,
            "Error al obtener productos",
            net::products::get_public(),
            ProductsEvent::FetchPublic,
        );
    }

    pub fn fetch_promotions(products: RwSignal<ProductsState>) {
        op::dispatch(
            products,
            "Error al obtener productos en promoción",
            net::products::get_promotions(),
            ProductsEvent::FetchPromotions,
        );
    }

    pub fn fetch_all(products: RwSignal<ProductsState>) {
        op::dispatch(
            products,
            "Error al obtener productos",
            net::products::get_all(),
            ProductsEvent::FetchAll,
        );
    }

    pub fn fetch_categories(products: RwSignal<ProductsState>) {
        op::dispatch(
            products,
            "Error al obtener categorías",
            net::products::get_categories(),
            ProductsEvent::FetchCategories,
        );
    }

    pub fn fetch_by_category(products: RwSignal<ProductsState>, category: String) {
        op::dispatch(
            products,
            "Error al obtener productos por categoría",
            async move { net::products::get_by_category(&category).await },
            ProductsEvent::FetchByCategory,
        );
    }

    pub fn create(
        products: RwSignal<ProductsState>,
        data: Value,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            products,
            "Error al crear producto",
            async move { net::products::create(&data).await },
            ProductsEvent::Create,
            on_done,
        );
    }

    pub fn update(
        products: RwSignal<ProductsState>,
        id: String,
        data: Value,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            products,
            "Error al actualizar producto",
            async move { net::products::update(&id, &data).await },
            ProductsEvent::Update,
            on_done,
        );
    }

    /// Soft delete: hides the product from the public catalog.
    pub fn delete(
        products: RwSignal<ProductsState>,
        id: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            products,
            "Error al eliminar producto",
            async move {
                net::products::delete(&id).await?;
                Ok(id)
            },
            ProductsEvent::Delete,
            on_done,
        );
    }

    /// Hard delete: removes the record from the server.
    pub fn delete_permanent(
        products: RwSignal<ProductsState>,
        id: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            products,
            "Error al eliminar producto",
            async move {
                net::products::delete_permanent(&id).await?;
                Ok(id)
            },
            ProductsEvent::DeletePermanent,
            on_done,
        );
    }

    /// Flip `activo`. The server returns the updated product, which lands
    /// in the list through the update identity.
    pub fn toggle_status(
        products: RwSignal<ProductsState>,
        id: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            products,
            "Error al cambiar estado del producto",
            async move { net::products::toggle_status(&id).await },
            ProductsEvent::Update,
            on_done,
        );
    }

    pub fn toggle_promotion(
        products: RwSignal<ProductsState>,
        id: String,
        on_done: impl FnOnce(Result<(), String>) + 'static,
    ) {
        op::dispatch_with(
            products,
            "Error al cambiar estado de promoción",
            async move { net::products::toggle_promotion(&id).await },
            ProductsEvent::TogglePromotion,
            on_done,
        );
    }
}
