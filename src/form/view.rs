//! Declarative description of an editor handed to the rendering layer.

use crate::form::schema::FieldSpec;
use crate::state::store::{Entry, EntryId};

/// How a stored record is summarized in the entry list.
pub trait EntryDisplay {
    fn title(&self) -> String;
    fn subtitle(&self) -> String;
}

/// Everything the form component needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit_label: String,
    pub rows: Vec<EntryRow>,
}

impl FormView {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.spec.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<String>,
}

/// One listed entry with its delete target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRow {
    pub id: EntryId,
    pub title: String,
    pub subtitle: String,
}

impl EntryRow {
    pub fn from_entry<T: EntryDisplay>(entry: &Entry<T>) -> Self {
        Self { id: entry.id, title: entry.data.title(), subtitle: entry.data.subtitle() }
    }
}
