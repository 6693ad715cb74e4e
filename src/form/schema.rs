//! Declarative form schema and field-level validation errors.
//!
//! A [`Schema`] describes the fields a form shows and turns a raw draft into a
//! validated value, or into a [`FieldErrors`] map the editor renders inline.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// Raw, unsubmitted form state addressed by field name.
pub trait FormDraft: Clone + Default + std::fmt::Debug {
    fn value(&self, field: &str) -> Option<&str>;

    /// Returns `false` for unknown field names.
    fn set_value(&mut self, field: &str, value: String) -> bool;
}

/// Field layout plus validation rules for one kind of entry.
pub trait Schema {
    type Draft: FormDraft;
    type Valid;

    fn fields(&self) -> Vec<FieldSpec>;

    fn validate(&self, draft: &Self::Draft) -> Result<Self::Valid, FieldErrors>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
}

/// Input control used to edit a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Text { placeholder: &'static str },
    Select { placeholder: &'static str, options: Vec<SelectOption> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A single rule violation on one field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Field name to message mapping, in the order the rules reported them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(ValidationError { field, message: message.into() });
    }

    /// First message reported for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}
