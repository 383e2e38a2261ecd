//! Loading Spinner Component

use leptos::prelude::*;

use crate::style::{cn, SpinnerSize};

#[component]
pub fn LoadingSpinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = cn([
        "border-white/30 border-t-white rounded-full animate-spin",
        size.classes(),
        class.as_str(),
    ]);
    view! { <div class=class role="status" aria-label="Loading"></div> }
}
