//! Typed configuration for the language schema and the entry form.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SUBMIT_LABEL: &str = "Add Language";

/// Validation options for [`crate::state::languages::LanguageSchema`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Strip surrounding whitespace before the non-empty check and on commit.
    pub trim_whitespace: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self { trim_whitespace: true }
    }
}

/// Editor behavior and the form's fixed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub submit_label: String,
    /// After a rejected submit, re-run validation on every field edit.
    pub revalidate_on_change: bool,
    pub schema: SchemaConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_label: DEFAULT_SUBMIT_LABEL.to_owned(),
            revalidate_on_change: true,
            schema: SchemaConfig::default(),
        }
    }
}
