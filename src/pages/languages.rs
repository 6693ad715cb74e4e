//! Profile page section for spoken and written languages.

use leptos::prelude::*;

use crate::components::language_form::LanguageForm;

#[component]
pub fn LanguagesPage() -> impl IntoView {
    view! {
        <div class="languages-page">
            <header class="languages-page__header">
                <h1>"Languages"</h1>
            </header>
            <LanguageForm/>
        </div>
    }
}
