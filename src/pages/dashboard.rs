//! Dashboard Page
//!
//! Entry point after sign-in: a link into the full collection and a
//! shortcut to add content.

use leptos::prelude::*;

use crate::components::ContentCreateModal;
use crate::models::Category;

#[component]
pub fn Dashboard() -> impl IntoView {
    let (create_open, set_create_open) = signal(false);

    view! {
        <div class="m-auto bg-white dark:bg-black/85 w-full min-h-screen h-full flex justify-center items-center">
            <div class="w-auto h-auto flex flex-col-reverse sm:flex-row justify-center items-center gap-8 sm:gap-4">
                <a href=Category::All.path() class="flex justify-center items-center">
                    <span class="text-[30px] text-gray-500 bg-white flex justify-center items-center rounded-full p-2">"➜"</span>
                    <h1 class="text-[30px] text-gray-500 rounded-[5px] px-2">{Category::All.label()}</h1>
                </a>
                <hr class="text-gray-500 w-[250px] sm:w-[100px] sm:block sm:rotate-90" />
                <button
                    class="text-gray-500 text-[5em] leading-none cursor-pointer"
                    title="Add content"
                    aria-label="Add content"
                    on:click=move |_| set_create_open.set(true)
                >
                    "⊕"
                </button>
                <ContentCreateModal open=create_open on_close=move |_| set_create_open.set(false) />
            </div>
        </div>
    }
}
