//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `store` is the generic ordered entry collection; `languages` is the
//! concrete record kind the profile form edits.

pub mod languages;
pub mod store;
