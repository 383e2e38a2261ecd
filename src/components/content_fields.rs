//! Content Form Fields
//!
//! Title, description, URL and tag inputs shared by the create and edit
//! modals.

use leptos::prelude::*;
use sbrain_ui::style::FIELD_ERROR_TEXT;
use sbrain_ui::{Input, InputVariant, Select, SelectOption, SelectVariant};

use crate::context::use_app_context;
use crate::forms::{self, ContentForm, FormState};
use crate::models::Tag;
use crate::store::AppStateStoreFields;

pub fn tag_options(tags: &[Tag]) -> Vec<SelectOption> {
    tags.iter().map(|t| SelectOption::new(t.id.to_string(), t.name.clone())).collect()
}

fn field_error(
    state: RwSignal<FormState<ContentForm>>,
    field: &'static str,
    inline_errors: bool,
) -> impl IntoView {
    move || {
        inline_errors
            .then(|| state.with(|s| s.field_error(field)))
            .flatten()
            .map(|msg| view! { <p class=FIELD_ERROR_TEXT>{msg}</p> })
    }
}

fn text_field(
    state: RwSignal<FormState<ContentForm>>,
    label: &'static str,
    placeholder: &'static str,
    field: &'static str,
    get: fn(&ContentForm) -> &String,
    set: fn(&mut ContentForm, String),
    inline_errors: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <Input
                label=label
                placeholder=placeholder
                variant=InputVariant::Content
                value=Signal::derive(move || state.with(|s| get(&s.form).clone()))
                on_input=Callback::new(move |value: String| state.update(|s| set(&mut s.form, value)))
            />
            {field_error(state, field, inline_errors)}
        </div>
    }
}

/// The four content inputs bound to `state`.
///
/// With `inline_errors` each field shows its own validation message;
/// otherwise the owning modal displays a joined summary.
#[component]
pub fn ContentFields(
    state: RwSignal<FormState<ContentForm>>,
    #[prop(optional)] inline_errors: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let options = Signal::derive(move || ctx.store.tags().with(|tags| tag_options(tags)));

    view! {
        <div class="space-y-4">
            {text_field(
                state, "TITLE", "e.g., React Hooks Guide", forms::TITLE,
                |f| &f.title, |f, v| f.title = v, inline_errors,
            )}
            {text_field(
                state, "CONTENT / DESCRIPTION", "e.g., A comprehensive guide to hooks...", forms::CONTENT,
                |f| &f.content, |f, v| f.content = v, inline_errors,
            )}
            {text_field(
                state, "URL", "https://example.com", forms::URL,
                |f| &f.url, |f, v| f.url = v, inline_errors,
            )}
            <div class="space-y-1">
                <Select
                    label="TYPE"
                    options=options
                    variant=SelectVariant::Content
                    value=Signal::derive(move || state.with(|s| s.form.tag_id.clone()))
                    on_change=Callback::new(move |value: String| state.update(|s| s.form.tag_id = value))
                />
                {field_error(state, forms::TAG, inline_errors)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_options_use_id_as_value() {
        let tags = vec![Tag { id: 3, name: "Docs".into() }, Tag { id: 4, name: "Links".into() }];
        let options = tag_options(&tags);
        assert_eq!(options, vec![SelectOption::new("3", "Docs"), SelectOption::new("4", "Links")]);
    }
}
