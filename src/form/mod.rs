//! Schema-driven entry editor.
//!
//! DESIGN
//! ======
//! Nothing here depends on Leptos. The editor, its schema contract and the
//! view model are plain Rust so they can be tested without a reactive runtime;
//! `components` only binds them to DOM events.

pub mod editor;
pub mod schema;
pub mod view;
