//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod lead_form;
mod loading;
mod nav_bar;
mod pagination;
mod stat_card;
mod status_select;
mod toast_host;

pub use delete_confirm_button::DeleteConfirmButton;
pub use lead_form::LeadFormFields;
pub use loading::Loading;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use stat_card::StatCard;
pub use status_select::StatusSelect;
pub use toast_host::ToastHost;
