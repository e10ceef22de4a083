//! In-memory `LeadApi` used by unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::LeadApi;
use crate::lead::{Lead, LeadDraft, LeadId, LeadStatus, StatusPatch};

pub fn make_lead(n: usize, status: LeadStatus) -> Lead {
    Lead {
        id: LeadId::new(format!("lead-{}", n)),
        name: format!("Lead {}", n),
        email: format!("lead{}@example.com", n),
        phone: format!("55500{:05}", n),
        status,
    }
}

pub fn sample_leads(count: usize) -> Vec<Lead> {
    (0..count).map(|n| make_lead(n, LeadStatus::New)).collect()
}

#[derive(Default)]
pub struct FakeApi {
    leads: RefCell<Vec<Lead>>,
    calls: RefCell<Vec<String>>,
    fail_next: Cell<bool>,
    next_id: Cell<usize>,
}

impl FakeApi {
    pub fn with_leads(leads: Vec<Lead>) -> Self {
        let next_id = leads.len();
        Self {
            leads: RefCell::new(leads),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn stored(&self, id: &LeadId) -> Option<Lead> {
        self.leads.borrow().iter().find(|l| &l.id == id).cloned()
    }

    fn record(&self, call: String) -> Result<(), String> {
        self.calls.borrow_mut().push(call);
        if self.fail_next.replace(false) {
            return Err("500 Internal Server Error".to_string());
        }
        Ok(())
    }

    fn modify(&self, id: &LeadId, f: impl FnOnce(&mut Lead)) -> Result<Lead, String> {
        let mut leads = self.leads.borrow_mut();
        let lead = leads
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| format!("404 lead {} not found", id))?;
        f(lead);
        Ok(lead.clone())
    }
}

#[async_trait(?Send)]
impl LeadApi for FakeApi {
    type Error = String;

    async fn list(&self) -> Result<Vec<Lead>, String> {
        self.record("GET".to_string())?;
        Ok(self.leads.borrow().clone())
    }

    async fn get(&self, id: &LeadId) -> Result<Lead, String> {
        self.record(format!("GET {}", id))?;
        self.stored(id).ok_or_else(|| format!("404 lead {} not found", id))
    }

    async fn create(&self, draft: &LeadDraft) -> Result<Lead, String> {
        self.record("POST".to_string())?;
        let n = self.next_id.get();
        self.next_id.set(n + 1);
        let lead = Lead {
            id: LeadId::new(format!("lead-{}", n)),
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            status: draft.status,
        };
        self.leads.borrow_mut().push(lead.clone());
        Ok(lead)
    }

    async fn update(&self, id: &LeadId, draft: &LeadDraft) -> Result<Lead, String> {
        self.record(format!("PUT {}", id))?;
        self.modify(id, |lead| {
            lead.name = draft.name.clone();
            lead.email = draft.email.clone();
            lead.phone = draft.phone.clone();
            lead.status = draft.status;
        })
    }

    async fn update_status(&self, id: &LeadId, patch: StatusPatch) -> Result<Lead, String> {
        self.record(format!("PUT {} status={}", id, patch.status))?;
        self.modify(id, |lead| lead.status = patch.status)
    }

    async fn delete(&self, id: &LeadId) -> Result<(), String> {
        self.record(format!("DELETE {}", id))?;
        self.leads.borrow_mut().retain(|l| &l.id != id);
        Ok(())
    }
}
