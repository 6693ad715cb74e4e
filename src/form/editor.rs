//! Draft editor: collects one new entry, validates it, commits it.
//!
//! DESIGN
//! ======
//! `submit` runs the whole submit → validate → commit sequence in one call, so
//! the only states visible between events are `Editing` and `Invalid`. A
//! rejected submit keeps the draft as typed; a committed one resets it.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::config::FormConfig;
use crate::form::schema::{FieldErrors, FormDraft, Schema};
use crate::form::view::{EntryDisplay, EntryRow, FieldView, FormView};
use crate::state::store::{Entry, EntryId, EntryStore};

/// Visible editor state between user events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Editing,
    /// Last submit failed validation; errors are shown inline.
    Invalid,
}

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed(EntryId),
    Rejected,
}

#[derive(Clone, Debug)]
pub struct Editor<S: Schema> {
    schema: S,
    config: FormConfig,
    draft: S::Draft,
    errors: FieldErrors,
    phase: EditorPhase,
    revalidate: bool,
}

impl<S: Schema> Editor<S> {
    pub fn new(schema: S, config: FormConfig) -> Self {
        Self {
            schema,
            config,
            draft: S::Draft::default(),
            errors: FieldErrors::new(),
            phase: EditorPhase::Editing,
            revalidate: false,
        }
    }

    pub fn draft(&self) -> &S::Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Update one draft field. Unknown names are ignored and return `false`.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        if !self.draft.set_value(field, value) {
            return false;
        }
        if self.revalidate {
            self.errors = match self.schema.validate(&self.draft) {
                Ok(_) => FieldErrors::new(),
                Err(errors) => errors,
            };
            self.phase = if self.errors.is_empty() { EditorPhase::Editing } else { EditorPhase::Invalid };
        }
        true
    }

    /// Validate the draft and, when valid, append it to `store` and reset.
    pub fn submit(&mut self, store: &mut EntryStore<S::Valid>) -> SubmitOutcome {
        match self.schema.validate(&self.draft) {
            Ok(valid) => {
                let id = store.add(valid);
                self.reset();
                SubmitOutcome::Committed(id)
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = EditorPhase::Invalid;
                self.revalidate = self.config.revalidate_on_change;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Back to default field values with no errors.
    pub fn reset(&mut self) {
        self.draft = S::Draft::default();
        self.errors = FieldErrors::new();
        self.phase = EditorPhase::Editing;
        self.revalidate = false;
    }

    /// Describe the form fields, inline errors and the listed entries.
    pub fn view(&self, entries: &[Entry<S::Valid>]) -> FormView
    where
        S::Valid: EntryDisplay,
    {
        let fields = self
            .schema
            .fields()
            .into_iter()
            .map(|spec| FieldView {
                value: self.draft.value(spec.name).unwrap_or_default().to_owned(),
                error: self.errors.get(spec.name).map(str::to_owned),
                spec,
            })
            .collect();

        FormView {
            fields,
            submit_label: self.config.submit_label.clone(),
            rows: entries.iter().map(EntryRow::from_entry).collect(),
        }
    }
}
