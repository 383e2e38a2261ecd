//! Select Component
//!
//! Controlled `<select>` with a leading "Select <Label>" placeholder option
//! whose value is the empty string.

use leptos::prelude::*;

use crate::control_id;
use crate::style::{cn, SelectVariant, LABEL};

/// One selectable entry
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub name: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// Uppercase first character, lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[component]
pub fn Select(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] variant: SelectVariant,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let id = control_id("select");
    let placeholder = format!("Select {}", capitalize(label.as_deref().unwrap_or("")));
    let class = cn([
        "w-full h-10 px-3 rounded-md text-sm outline-none transition-all cursor-pointer appearance-none",
        variant.classes(),
        class.as_str(),
    ]);

    view! {
        <div class="space-y-1">
            {label.map(|text| view! { <label class=LABEL for=id.clone()>{text}</label> })}
            <div class="relative">
                <select
                    id=id.clone()
                    class=class
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                    <For
                        each=move || options.get()
                        key=|opt| opt.value.clone()
                        children=move |opt| {
                            let current = opt.value.clone();
                            view! {
                                <option value=opt.value selected=move || value.get() == current>
                                    {opt.name}
                                </option>
                            }
                        }
                    />
                </select>
                <div class="absolute right-3 top-3 pointer-events-none text-gray-500">"▾"</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("TYPE"), "Type");
        assert_eq!(capitalize("tag"), "Tag");
        assert_eq!(capitalize(""), "");
    }
}
