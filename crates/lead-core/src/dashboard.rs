//! Dashboard Aggregation
//!
//! Per-status counts over the fetched collection.

use std::collections::BTreeMap;

use crate::lead::{Lead, LeadStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    /// Only statuses that occur, in funnel order
    pub per_status: BTreeMap<LeadStatus, usize>,
}

impl Summary {
    pub fn count(&self, status: LeadStatus) -> usize {
        self.per_status.get(&status).copied().unwrap_or(0)
    }

    /// Percentage of all leads in `status` (0.0 when empty)
    pub fn share(&self, status: LeadStatus) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(status) as f64 / self.total as f64 * 100.0
    }
}

pub fn aggregate(leads: &[Lead]) -> Summary {
    let mut per_status = BTreeMap::new();
    for lead in leads {
        *per_status.entry(lead.status).or_insert(0) += 1;
    }
    Summary { total: leads.len(), per_status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::make_lead;

    #[test]
    fn test_aggregate_counts() {
        let leads = vec![
            make_lead(0, LeadStatus::New),
            make_lead(1, LeadStatus::New),
            make_lead(2, LeadStatus::Closed),
        ];
        let summary = aggregate(&leads);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.per_status,
            BTreeMap::from([(LeadStatus::New, 2), (LeadStatus::Closed, 1)])
        );
        assert_eq!(summary.count(LeadStatus::Lost), 0);
    }

    #[test]
    fn test_empty_collection() {
        let summary = aggregate(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.share(LeadStatus::New), 0.0);
    }

    #[test]
    fn test_funnel_order_and_share() {
        let leads = vec![
            make_lead(0, LeadStatus::Closed),
            make_lead(1, LeadStatus::Contacted),
            make_lead(2, LeadStatus::Contacted),
            make_lead(3, LeadStatus::New),
        ];
        let summary = aggregate(&leads);
        let order: Vec<LeadStatus> = summary.per_status.keys().copied().collect();
        assert_eq!(order, vec![LeadStatus::New, LeadStatus::Contacted, LeadStatus::Closed]);
        assert_eq!(summary.share(LeadStatus::Contacted), 50.0);
    }
}
