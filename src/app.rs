//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::languages::LanguagesPage;
use crate::state::languages::{Language, LanguageStore};
use crate::state::store::{Entry, StoreEvent};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the language store and hands it to the page tree through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut languages = LanguageStore::new();
    languages.subscribe(log_store_event);
    provide_context(RwSignal::new(languages));

    view! {
        <Stylesheet id="leptos" href="/pkg/resume-languages.css"/>
        <Title text="Languages"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LanguagesPage/>
            </Routes>
        </Router>
    }
}

fn log_store_event(event: &StoreEvent, entries: &[Entry<Language>]) {
    match event {
        StoreEvent::Added(id) => leptos::logging::log!("language {id} added ({} total)", entries.len()),
        StoreEvent::Removed(id) => leptos::logging::log!("language {id} removed ({} total)", entries.len()),
    }
}
