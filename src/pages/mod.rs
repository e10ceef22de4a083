//! Routed Pages
//!
//! One component per route: `/`, `/add`, `/edit/:id`, `/dashboard`.

mod add_lead;
mod dashboard;
mod edit_lead;
mod lead_list;
mod not_found;

pub use add_lead::AddLeadPage;
pub use dashboard::DashboardPage;
pub use edit_lead::EditLeadPage;
pub use lead_list::LeadListPage;
pub use not_found::NotFoundPage;
