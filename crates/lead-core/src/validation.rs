//! Lead Form Validation
//!
//! Client-side field checks run before any create/update call.

use std::collections::BTreeMap;
use std::fmt;

use crate::lead::{LeadDraft, LeadStatus};

/// Minimum phone length in characters
pub const MIN_PHONE_LEN: usize = 10;

/// Which form is being validated. Status is only mandatory when editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Status,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form state as typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Option<LeadStatus>,
}

impl LeadForm {
    /// Blank add form (status defaults to New)
    pub fn new_lead() -> Self {
        Self {
            status: Some(LeadStatus::New),
            ..Default::default()
        }
    }

    pub fn from_draft(draft: LeadDraft) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            status: Some(draft.status),
        }
    }

    /// Current text of a field (status as its wire value, empty when unset)
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Status => self.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Status => self.status = LeadStatus::parse(&value),
        }
    }

    /// Validate and, if clean, build the request body.
    ///
    /// Field text is submitted as typed; only the checks trim.
    pub fn to_draft(&self, kind: FormKind) -> Result<LeadDraft, ValidationErrors> {
        let errors = validate(self, kind);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LeadDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: self.status.unwrap_or_default(),
        })
    }
}

/// Field-scoped error messages. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Check a lead form. Pure; returns every failing field at once.
pub fn validate(form: &LeadForm, kind: FormKind) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if form.email.trim().is_empty() || !form.email.contains('@') {
        errors.insert(Field::Email, "Valid email is required");
    }
    // Length counts the untrimmed input
    if form.phone.trim().is_empty() || form.phone.chars().count() < MIN_PHONE_LEN {
        errors.insert(Field::Phone, "Valid phone number is required");
    }
    if kind == FormKind::Edit && form.status.is_none() {
        errors.insert(Field::Status, "Status is required");
    }

    errors
}
