//! Step definitions and the accumulated form record.
//!
//! A contact form is described by an ordered sequence of [`FieldStep`]s.
//! The sequence is linear and fixed; navigation order is definition order.
//! [`wizard::ContactWizard`] drives the sequence one field at a time.

pub mod wizard;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// How a field is entered and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Multiline,
}

/// Declarative description of one wizard step.
#[derive(Debug, Clone)]
pub struct FieldStep {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldStep {
    pub fn new(
        field: &'static str,
        label: &'static str,
        kind: InputKind,
        placeholder: &'static str,
    ) -> Self {
        Self {
            field,
            label,
            kind,
            required: true,
            placeholder,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// The contact form shipped with the binary.
static CONTACT_STEPS: Lazy<Vec<FieldStep>> = Lazy::new(|| {
    vec![
        FieldStep::new("name", "Name", InputKind::Text, "What's your name?"),
        FieldStep::new("surname", "Surname", InputKind::Text, "Your surname?").optional(),
        FieldStep::new("company", "Company", InputKind::Text, "Where do you work?").optional(),
        FieldStep::new("email", "Email", InputKind::Email, "Your email address?"),
        FieldStep::new(
            "subject",
            "Subject",
            InputKind::Text,
            "What do you want to talk about?",
        ),
        FieldStep::new(
            "message",
            "Message",
            InputKind::Multiline,
            "Tell me more details...",
        ),
    ]
});

/// Returns a fresh copy of the default contact step sequence.
pub fn contact_steps() -> Vec<FieldStep> {
    CONTACT_STEPS.clone()
}

/// Field values accumulated across all visited steps.
///
/// Values survive backward navigation; only a successful submission clears
/// them. Unset fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    values: BTreeMap<&'static str, String>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Whitespace-only values count as blank, same as empty ones.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}
