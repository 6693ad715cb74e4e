//! Leptos view components for the language editor.

pub mod language_card;
pub mod language_form;
