//! Lead Desk Core
//!
//! Platform-free logic behind the Lead Desk front-end:
//! - lead: entity and wire types
//! - validation: client-side form checks
//! - listing: filter + pagination over the local mirror
//! - mutation: remote calls that confirm local patches
//! - form: add/edit submit state machine
//! - dashboard: per-status aggregation
//! - api: the `LeadApi` seam to the backend

mod api;
mod dashboard;
mod form;
mod lead;
mod listing;
mod mutation;
mod validation;

#[cfg(test)]
mod fake;

pub use api::LeadApi;
pub use dashboard::{aggregate, Summary};
pub use form::{FormController, FormPhase, SubmitError};
pub use lead::{Lead, LeadDraft, LeadId, LeadStatus, StatusPatch};
pub use listing::{filter_leads, page_window, total_pages, LeadListing, PageError, PAGE_SIZE};
pub use mutation::{change_status, delete_lead, ConfirmedMutation, MutationKind};
pub use validation::{validate, Field, FormKind, LeadForm, ValidationErrors, MIN_PHONE_LEN};
