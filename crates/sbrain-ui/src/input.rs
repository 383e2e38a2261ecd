//! Text Input Component
//!
//! Controlled input: the value comes from a signal and every keystroke is
//! reported through `on_input`.

use leptos::prelude::*;

use crate::control_id;
use crate::style::{cn, InputVariant, LABEL};

#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] variant: InputVariant,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let id = control_id("input");
    let class = cn([variant.classes(), class.as_str()]);

    view! {
        <div class="sm:col-span-3">
            {label.map(|text| view! { <label class=LABEL for=id.clone()>{text}</label> })}
            <input
                id=id.clone()
                type=input_type
                class=class
                placeholder=placeholder
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
