//! Lead API Trait
//!
//! Abstract interface to the remote lead store.
//! The browser client implements it over HTTP; tests use an in-memory fake.

use std::fmt::Display;

use async_trait::async_trait;

use crate::lead::{Lead, LeadDraft, LeadId, StatusPatch};

/// Remote CRUD operations on leads.
///
/// Futures are `?Send`: browser fetch futures are bound to the JS thread.
/// Implementations pass calls straight through, with no retry or caching.
#[async_trait(?Send)]
pub trait LeadApi {
    type Error: Display;

    /// Fetch the whole collection
    async fn list(&self) -> Result<Vec<Lead>, Self::Error>;

    /// Fetch one lead
    async fn get(&self, id: &LeadId) -> Result<Lead, Self::Error>;

    /// Create a lead; the backend assigns the id
    async fn create(&self, draft: &LeadDraft) -> Result<Lead, Self::Error>;

    /// Replace all editable fields
    async fn update(&self, id: &LeadId, draft: &LeadDraft) -> Result<Lead, Self::Error>;

    /// Replace only the status
    async fn update_status(&self, id: &LeadId, patch: StatusPatch) -> Result<Lead, Self::Error>;

    async fn delete(&self, id: &LeadId) -> Result<(), Self::Error>;
}
