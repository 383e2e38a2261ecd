//! Landing Page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use sbrain_ui::Button;

use crate::context::use_app_context;

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new_local(use_navigate());

    let join = Callback::new(move |_: ()| {
        if ctx.is_authenticated() {
            navigate.with_value(|nav| nav("/dashboard", NavigateOptions::default()));
        } else {
            ctx.login_open.set(true);
        }
    });

    view! {
        <div class="m-auto w-full min-h-screen h-full flex justify-center items-center bg-home-background dark:bg-home-background-dark">
            <div class="w-auto h-auto flex justify-center items-center flex-col gap-8 px-2">
                <h1 class="text-center text-text-300 dark:text-text-dark-100 text-[clamp(30px,9vw,72px)] capitalize font-bold">
                    "Your second brain"<br class="hidden sm:block" />" never forgets"
                </h1>
                <p class="text-center text-text-300 dark:text-text-dark-300 text-[clamp(11px,2vw,20px)]">
                    "Save tweets, videos, docs and links in one place."<br class="hidden sm:block" />
                    " Tag them, find them again, and open them when you need them."
                </p>
                <Button on_click=join class="w-40">"Click To Join"</Button>
            </div>
        </div>
    }
}
