//! Button Component

use leptos::prelude::*;

use crate::style::{cn, when, ButtonVariant};

/// Styled button
///
/// Defaults to `type="button"`; pass `button_type="submit"` inside forms.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        cn([
            "cursor-pointer",
            variant.classes(),
            class.as_str(),
            when(disabled.get(), "opacity-50 cursor-not-allowed"),
        ])
    };

    view! {
        <button
            type=button_type
            title=title
            class=class
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
