//! Confirmed Mutations
//!
//! Remote calls whose success is required before the local listing may change.
//! A `ConfirmedMutation` can only be obtained from a successful API call.

use crate::api::LeadApi;
use crate::lead::{LeadId, LeadStatus, StatusPatch};

/// What the backend confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Deleted(LeadId),
    StatusChanged(LeadId, LeadStatus),
}

/// Proof that the backend accepted a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedMutation {
    kind: MutationKind,
}

impl ConfirmedMutation {
    pub(crate) fn new(kind: MutationKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &MutationKind {
        &self.kind
    }

    pub fn lead_id(&self) -> &LeadId {
        match &self.kind {
            MutationKind::Deleted(id) | MutationKind::StatusChanged(id, _) => id,
        }
    }
}

/// Delete a lead remotely
pub async fn delete_lead<A: LeadApi + ?Sized>(
    api: &A,
    id: LeadId,
) -> Result<ConfirmedMutation, A::Error> {
    api.delete(&id).await?;
    log::debug!("[Mutation] Deleted lead {}", id);
    Ok(ConfirmedMutation::new(MutationKind::Deleted(id)))
}

/// Send a status-only update
pub async fn change_status<A: LeadApi + ?Sized>(
    api: &A,
    id: LeadId,
    status: LeadStatus,
) -> Result<ConfirmedMutation, A::Error> {
    api.update_status(&id, StatusPatch { status }).await?;
    log::debug!("[Mutation] Lead {} moved to {}", id, status);
    Ok(ConfirmedMutation::new(MutationKind::StatusChanged(id, status)))
}
