//! Form for adding a language, followed by the list of languages already added.

use leptos::prelude::*;

use crate::components::language_card::LanguageCard;
use crate::config::FormConfig;
use crate::form::editor::{Editor, SubmitOutcome};
use crate::form::schema::{Control, FieldSpec, SelectOption};
use crate::form::view::EntryRow;
use crate::state::languages::{LanguageSchema, LanguageStore};
use crate::state::store::EntryId;

/// Language editor bound to the `RwSignal<LanguageStore>` in context.
///
/// Field inputs are built once from the view model; only their values and
/// error text are reactive, so typing never re-creates the input element.
#[component]
pub fn LanguageForm(#[prop(optional)] config: Option<FormConfig>) -> impl IntoView {
    let store = expect_context::<RwSignal<LanguageStore>>();
    let config = config.unwrap_or_default();
    let editor = RwSignal::new(Editor::new(LanguageSchema::new(config.schema), config));

    let form = Memo::new(move |_| store.with(|s| editor.with(|e| e.view(s.entries()))));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = SubmitOutcome::Rejected;
        store.update(|s| editor.update(|e| outcome = e.submit(s)));
        if outcome == SubmitOutcome::Rejected {
            let count = editor.with_untracked(|e| e.errors().len());
            leptos::logging::log!("language not added: {count} field error(s)");
        }
    };

    let on_remove = Callback::new(move |id: EntryId| {
        store.update(|s| {
            s.remove(id);
        });
    });

    let fields = form.with_untracked(|f| f.fields.clone());
    let submit_label = form.with_untracked(|f| f.submit_label.clone());

    view! {
        <div class="language-form">
            <form class="entry-form" on:submit=on_submit>
                {fields
                    .into_iter()
                    .map(|field| {
                        let name = field.spec.name;
                        let value = Signal::derive(move || {
                            form.with(|f| f.field(name).map(|v| v.value.clone()).unwrap_or_default())
                        });
                        let error = Signal::derive(move || form.with(|f| f.field(name).and_then(|v| v.error.clone())));
                        let on_input = Callback::new(move |text: String| {
                            editor.update(|e| {
                                e.set_field(name, text);
                            });
                        });
                        view! { <FormField spec=field.spec value=value error=error on_input=on_input/> }
                    })
                    .collect_view()}
                <button class="btn btn--primary" type="submit">
                    {submit_label}
                </button>
            </form>

            <div class="language-form__list">
                <For
                    each=move || form.with(|f| f.rows.clone())
                    key=|row: &EntryRow| row.id
                    children=move |row: EntryRow| view! { <LanguageCard row=row on_remove=on_remove/> }
                />
            </div>
        </div>
    }
}

/// One labelled input with its inline validation message.
#[component]
fn FormField(
    spec: FieldSpec,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = spec.name;

    let control = match spec.control {
        Control::Text { placeholder } => view! {
            <input
                class="entry-form__input"
                id=id
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
        Control::Select { placeholder, options } => view! {
            <select
                class="entry-form__select"
                id=id
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="" disabled=true>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|SelectOption { value: option_value, label }| {
                        view! {
                            <option value=option_value selected=move || value.get() == option_value>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="entry-form__field">
            <label class="entry-form__label" for=id>
                {spec.label}
            </label>
            {control}
            <Show when=move || error.get().is_some()>
                <p class="entry-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
