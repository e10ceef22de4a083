//! Lead Form Controller
//!
//! Submit state machine shared by the add and edit pages:
//! Editing -> Validating -> Submitting -> Succeeded, or back to Editing.

use crate::lead::{Lead, LeadDraft};
use crate::validation::{Field, FormKind, LeadForm, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    kind: FormKind,
    form: LeadForm,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl FormController {
    /// Empty add form with status New
    pub fn add() -> Self {
        Self::with_form(FormKind::Add, LeadForm::new_lead())
    }

    /// Edit form, empty until `load` is called
    pub fn edit() -> Self {
        Self::with_form(FormKind::Edit, LeadForm::default())
    }

    fn with_form(kind: FormKind, form: LeadForm) -> Self {
        Self {
            kind,
            form,
            errors: ValidationErrors::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Pre-populate from a fetched lead
    pub fn load(&mut self, lead: &Lead) {
        self.form = LeadForm::from_draft(lead.to_draft());
        self.errors = ValidationErrors::default();
    }

    /// Update one field. Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.is_submitting() {
            return;
        }
        self.form.set(field, value);
    }

    /// Validate and move to Submitting. No draft means no API call.
    pub fn begin_submit(&mut self) -> Result<LeadDraft, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.phase = FormPhase::Validating;
        match self.form.to_draft(self.kind) {
            Ok(draft) => {
                self.errors = ValidationErrors::default();
                self.phase = FormPhase::Submitting;
                Ok(draft)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = FormPhase::Editing;
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the API call
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.phase = if succeeded { FormPhase::Succeeded } else { FormPhase::Editing };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LeadApi;
    use crate::fake::{make_lead, FakeApi};
    use crate::lead::LeadStatus;

    fn fill_valid(ctl: &mut FormController) {
        ctl.set_field(Field::Name, "Grace".to_string());
        ctl.set_field(Field::Email, "grace@navy.mil".to_string());
        ctl.set_field(Field::Phone, "2025550143".to_string());
    }

    #[test]
    fn test_add_form_defaults() {
        let ctl = FormController::add();
        assert_eq!(ctl.form().status, Some(LeadStatus::New));
        assert!(ctl.form().name.is_empty());
        assert_eq!(ctl.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut ctl = FormController::add();
        ctl.set_field(Field::Name, "Grace".to_string());

        let err = ctl.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ref e) if e.len() == 2));
        assert_eq!(ctl.phase(), FormPhase::Editing);
        assert!(ctl.errors().get(Field::Email).is_some());
        assert!(ctl.errors().get(Field::Phone).is_some());
    }

    #[test]
    fn test_submit_errors_match_returned_errors() {
        let mut ctl = FormController::edit();
        ctl.set_field(Field::Name, "Ada".to_string());
        ctl.set_field(Field::Phone, "12345".to_string());

        match ctl.begin_submit() {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(&errors, ctl.errors());
                assert_eq!(errors.get(Field::Phone), Some("Valid phone number is required"));
                assert_eq!(errors.get(Field::Status), Some("Status is required"));
                assert_eq!(errors.get(Field::Name), None);
            }
            other => panic!("expected invalid form, got {:?}", other),
        }
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut ctl = FormController::add();
        fill_valid(&mut ctl);
        assert!(ctl.begin_submit().is_ok());
        assert_eq!(ctl.begin_submit(), Err(SubmitError::InFlight));

        ctl.set_field(Field::Name, "ignored".to_string());
        assert_eq!(ctl.form().name, "Grace");
    }

    #[test]
    fn test_failure_returns_to_editing() {
        let mut ctl = FormController::add();
        fill_valid(&mut ctl);
        ctl.begin_submit().unwrap();
        ctl.finish_submit(false);
        assert_eq!(ctl.phase(), FormPhase::Editing);
        assert!(ctl.begin_submit().is_ok());
        ctl.finish_submit(true);
        assert_eq!(ctl.phase(), FormPhase::Succeeded);
    }

    #[test]
    fn test_errors_clear_after_fix() {
        let mut ctl = FormController::add();
        assert!(ctl.begin_submit().is_err());
        assert_eq!(ctl.errors().len(), 3);
        fill_valid(&mut ctl);
        assert!(ctl.begin_submit().is_ok());
        assert!(ctl.errors().is_empty());
    }

    #[tokio::test]
    async fn test_edit_flow_against_api() {
        let api = FakeApi::with_leads(vec![make_lead(7, LeadStatus::Contacted)]);
        let id = crate::lead::LeadId::new("lead-7");

        let mut ctl = FormController::edit();
        assert_eq!(ctl.form().status, None);
        ctl.load(&api.get(&id).await.unwrap());
        assert_eq!(ctl.form().status, Some(LeadStatus::Contacted));

        ctl.set_field(Field::Status, "Qualified".to_string());
        let draft = ctl.begin_submit().unwrap();
        let result = api.update(&id, &draft).await;
        ctl.finish_submit(result.is_ok());

        assert_eq!(ctl.phase(), FormPhase::Succeeded);
        assert_eq!(api.stored(&id).unwrap().status, LeadStatus::Qualified);
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let api = FakeApi::default();
        let mut ctl = FormController::add();
        if let Ok(draft) = ctl.begin_submit() {
            let _ = api.create(&draft).await;
        }
        assert!(api.calls().is_empty());
    }
}
