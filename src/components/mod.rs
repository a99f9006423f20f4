//! Reusable UI components.

pub mod category_sidebar;
pub mod confirm_modal;
pub mod navbar;
pub mod product_card;
pub mod product_form;
pub mod product_list;
pub mod require_auth;
pub mod toast;
