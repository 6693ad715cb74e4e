//! Card for one added language with its delete control.

use leptos::prelude::*;

use crate::form::view::EntryRow;
use crate::state::store::EntryId;

/// Shows the language and its proficiency tag. Delete is immediate.
#[component]
pub fn LanguageCard(row: EntryRow, on_remove: Callback<EntryId>) -> impl IntoView {
    let id = row.id;

    view! {
        <div class="language-card">
            <div class="language-card__text">
                <p class="language-card__name">{row.title}</p>
                <p class="language-card__level">{row.subtitle}</p>
            </div>
            <button
                class="btn btn--ghost language-card__remove"
                type="button"
                title="Remove language"
                on:click=move |_| on_remove.run(id)
            >
                <svg class="language-card__icon" viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M3 6h18"></path>
                    <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"></path>
                    <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"></path>
                    <line x1="10" y1="11" x2="10" y2="17"></line>
                    <line x1="14" y1="11" x2="14" y2="17"></line>
                </svg>
            </button>
        </div>
    }
}
