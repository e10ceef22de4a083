//! Lead Listing Engine
//!
//! Local, possibly stale mirror of the backend collection with a status
//! filter and fixed-size pagination. Only changes on a full refresh or a
//! `ConfirmedMutation`.

use std::ops::Range;

use crate::lead::{Lead, LeadId, LeadStatus};
use crate::mutation::{ConfirmedMutation, MutationKind};

/// Leads per page
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page {requested} is out of range (1..={total_pages})")]
    OutOfRange { requested: usize, total_pages: usize },
}

/// Number of pages needed for `count` items (0 when empty)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Index window of a 1-based page, clamped to `len`
pub fn page_window(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Keep leads matching the filter; `None` keeps everything
pub fn filter_leads(leads: &[Lead], filter: Option<LeadStatus>) -> Vec<&Lead> {
    leads
        .iter()
        .filter(|lead| filter.map_or(true, |status| lead.status == status))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadListing {
    leads: Vec<Lead>,
    filter: Option<LeadStatus>,
    page: usize,
}

impl Default for LeadListing {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LeadListing {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads, filter: None, page: 1 }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn filter(&self) -> Option<LeadStatus> {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Stored status of a lead, as last confirmed by the backend
    pub fn status_of(&self, id: &LeadId) -> Option<LeadStatus> {
        self.leads.iter().find(|lead| &lead.id == id).map(|lead| lead.status)
    }

    /// Replace the collection after a successful fetch
    pub fn replace_all(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
        self.clamp_page();
    }

    /// Change the status filter and go back to the first page
    pub fn set_filter(&mut self, filter: Option<LeadStatus>) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn filtered(&self) -> Vec<&Lead> {
        filter_leads(&self.leads, self.filter)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), PAGE_SIZE)
    }

    /// Leads on the current page
    pub fn visible(&self) -> Vec<Lead> {
        let filtered = self.filtered();
        filtered[page_window(filtered.len(), self.page, PAGE_SIZE)]
            .iter()
            .map(|lead| (*lead).clone())
            .collect()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Jump to a 1-based page. No wraparound.
    pub fn go_to(&mut self, page: usize) -> Result<usize, PageError> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(PageError::OutOfRange { requested: page, total_pages });
        }
        self.page = page;
        Ok(page)
    }

    pub fn prev_page(&mut self) -> Result<usize, PageError> {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> Result<usize, PageError> {
        self.go_to(self.page + 1)
    }

    /// "Page X of Y", never showing zero pages
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages().max(1))
    }

    /// Patch local state with a mutation the backend accepted.
    ///
    /// Returns false when the lead is not in the local collection.
    pub fn apply(&mut self, mutation: &ConfirmedMutation) -> bool {
        match mutation.kind() {
            MutationKind::Deleted(id) => {
                let before = self.leads.len();
                self.leads.retain(|lead| &lead.id != id);
                let removed = self.leads.len() != before;
                self.clamp_page();
                removed
            }
            MutationKind::StatusChanged(id, status) => {
                let patched = match self.leads.iter_mut().find(|lead| &lead.id == id) {
                    Some(lead) => {
                        lead.status = *status;
                        true
                    }
                    None => false,
                };
                // The lead may have left the filtered set
                self.clamp_page();
                patched
            }
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.total_pages()).max(1);
    }
}
