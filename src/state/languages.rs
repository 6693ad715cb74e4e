//! Language entries: the record, its proficiency scale, the form draft and
//! the validation rules.

#[cfg(test)]
#[path = "languages_test.rs"]
mod languages_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SchemaConfig;
use crate::form::schema::{Control, FieldErrors, FieldSpec, FormDraft, Schema, SelectOption};
use crate::form::view::EntryDisplay;
use crate::state::store::EntryStore;

pub const FIELD_LANGUAGE: &str = "language";
pub const FIELD_PROFICIENCY: &str = "proficiency";

pub const LANGUAGE_REQUIRED: &str = "Language is required";
pub const PROFICIENCY_INVALID: &str = "Select a valid proficiency level";

/// Store of language entries shared through context.
pub type LanguageStore = EntryStore<Language>;

/// Self-assessed skill level, lowest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Basic,
    Beginner,
    Intermediate,
    Proficient,
    Fluent,
    Native,
}

impl Proficiency {
    pub const ALL: [Proficiency; 6] = [
        Proficiency::Basic,
        Proficiency::Beginner,
        Proficiency::Intermediate,
        Proficiency::Proficient,
        Proficiency::Fluent,
        Proficiency::Native,
    ];

    /// Lowercase tag used as the select value and in serialized entries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Proficiency::Basic => "basic",
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Proficient => "proficient",
            Proficiency::Fluent => "fluent",
            Proficiency::Native => "native",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Basic => "Basic",
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Proficient => "Proficient",
            Proficiency::Fluent => "Fluent",
            Proficiency::Native => "Native",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown proficiency level '{0}'")]
pub struct UnknownProficiency(pub String);

impl FromStr for Proficiency {
    type Err = UnknownProficiency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Proficiency::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProficiency(s.to_owned()))
    }
}

/// A validated language record as held by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: Proficiency,
}

impl EntryDisplay for Language {
    fn title(&self) -> String {
        self.language.clone()
    }

    fn subtitle(&self) -> String {
        self.proficiency.as_str().to_owned()
    }
}

/// Raw form values for a language being added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageDraft {
    pub language: String,
    pub proficiency: String,
}

impl Default for LanguageDraft {
    fn default() -> Self {
        Self { language: String::new(), proficiency: Proficiency::default().as_str().to_owned() }
    }
}

impl FormDraft for LanguageDraft {
    fn value(&self, field: &str) -> Option<&str> {
        match field {
            FIELD_LANGUAGE => Some(self.language.as_str()),
            FIELD_PROFICIENCY => Some(self.proficiency.as_str()),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> bool {
        match field {
            FIELD_LANGUAGE => self.language = value,
            FIELD_PROFICIENCY => self.proficiency = value,
            _ => return false,
        }
        true
    }
}

/// Field layout and rules for the language form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageSchema {
    pub config: SchemaConfig,
}

impl LanguageSchema {
    #[must_use]
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }
}

impl Schema for LanguageSchema {
    type Draft = LanguageDraft;
    type Valid = Language;

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                name: FIELD_LANGUAGE,
                label: "Language",
                control: Control::Text { placeholder: "e.g. English" },
            },
            FieldSpec {
                name: FIELD_PROFICIENCY,
                label: "Proficiency Level",
                control: Control::Select {
                    placeholder: "Select proficiency level",
                    options: Proficiency::ALL
                        .into_iter()
                        .map(|p| SelectOption { value: p.as_str(), label: p.label() })
                        .collect(),
                },
            },
        ]
    }

    fn validate(&self, draft: &LanguageDraft) -> Result<Language, FieldErrors> {
        let mut errors = FieldErrors::new();

        let language = if self.config.trim_whitespace { draft.language.trim() } else { draft.language.as_str() };
        if language.is_empty() {
            errors.push(FIELD_LANGUAGE, LANGUAGE_REQUIRED);
        }

        let proficiency = match draft.proficiency.parse::<Proficiency>() {
            Ok(p) => Some(p),
            Err(_) => {
                errors.push(FIELD_PROFICIENCY, PROFICIENCY_INVALID);
                None
            }
        };

        match proficiency {
            Some(proficiency) if errors.is_empty() => Ok(Language { language: language.to_owned(), proficiency }),
            _ => Err(errors),
        }
    }
}
