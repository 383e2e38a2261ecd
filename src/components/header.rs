//! Header
//!
//! Fixed top bar: logo, category navigation (desktop pill bar and mobile
//! drawer), create/login/logout actions and the theme toggle.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use sbrain_ui::style::{cn, when};
use sbrain_ui::ThemeToggle;

use crate::components::{ContentCreateModal, SignInUpModal};
use crate::context::use_app_context;
use crate::models::Category;

const LOGO: &str = "text-text-300 dark:text-text-dark-100 font-bold tracking-widest cursor-pointer";

#[component]
fn CategoryLinks(
    /// Drawer layout instead of the desktop pill bar
    #[prop(optional)] drawer: bool,
    #[prop(optional, into)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let location = use_location();

    Category::ALL
        .into_iter()
        .map(|category| {
            let path = category.path();
            let target = path.clone();
            let active = move || location.pathname.with(|p| p.eq_ignore_ascii_case(&target));
            let class = move || {
                if drawer {
                    cn([
                        "text-text-300 dark:text-text-dark-300 flex items-center gap-3 p-3 rounded-lg transition-all duration-150",
                        when(active(), "bg-black dark:bg-white text-white dark:text-black"),
                        when(!active(), "hover:bg-gray-100 dark:hover:bg-gray-800"),
                    ])
                } else {
                    cn([
                        "rounded-full px-4 py-1 text-text-300 dark:text-text-dark-100 flex justify-center items-center gap-1 transition-all duration-150",
                        when(active(), "bg-black text-white"),
                    ])
                }
            };
            let link = view! {
                <a
                    href=path
                    class=class
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.run(());
                        }
                    }
                >
                    {category.label()}
                </a>
            };
            if drawer {
                view! { <li>{link}</li> }.into_any()
            } else {
                link.into_any()
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new_local(use_navigate());
    let (drawer_open, set_drawer_open) = signal(false);
    let (create_open, set_create_open) = signal(false);
    let signed_in = move || ctx.is_authenticated();

    let go_home = move |_: MouseEvent| navigate.with_value(|nav| nav("/", NavigateOptions::default()));
    let logout = move |_: MouseEvent| {
        ctx.sign_out();
        set_drawer_open.set(false);
        navigate.with_value(|nav| nav("/", NavigateOptions::default()));
    };

    view! {
        <header class="fixed w-full h-16 flex justify-between items-center bg-header-background dark:bg-header-background-dark px-10 z-50">
            <Show
                when=signed_in
                fallback=move || view! {
                    <div id="logo">
                        <h1 class=LOGO on:click=go_home>"S-BRAIN"</h1>
                    </div>
                }
            >
                <div class="lg:hidden">
                    <button
                        class="text-3xl text-text-300 dark:text-text-dark-100 cursor-pointer"
                        aria-label="Open menu"
                        on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                    >
                        "⋮"
                    </button>
                </div>
                <div id="logo" class="hidden lg:block">
                    <h1 class=LOGO on:click=go_home>"S-BRAIN"</h1>
                </div>
                <nav id="nav-items" class="hidden lg:block">
                    <div class="m-auto max-w-[640px] w-full h-[45px] bg-nav-background-light dark:bg-nav-background-dark-light rounded-full flex justify-between items-center px-[6px]">
                        <CategoryLinks />
                    </div>
                </nav>
            </Show>

            <div id="auth-items" class="flex items-center gap-4">
                <Show when=signed_in>
                    <button
                        class="rounded-full py-2 px-4 bg-amber-400 text-white cursor-pointer"
                        title="Add content"
                        aria-label="Add content"
                        on:click=move |_| set_create_open.set(true)
                    >
                        "+"
                    </button>
                </Show>
                <ThemeToggle />
                <div class="rounded-sm py-2 px-4">
                    <Show
                        when=signed_in
                        fallback=move || view! {
                            <button
                                class="font-medium text-text-300 dark:text-text-dark-100 cursor-pointer"
                                on:click=move |_| ctx.login_open.set(true)
                            >
                                "Login"
                            </button>
                        }
                    >
                        <button class="font-medium text-[#ff0000] cursor-pointer" on:click=logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </header>

        <nav class=move || cn([
            "lg:hidden fixed top-0 left-0 h-full w-80 bg-header-background dark:bg-header-background-dark z-50 transition-transform duration-300 ease-in-out",
            when(drawer_open.get(), "translate-x-0"),
            when(!drawer_open.get(), "-translate-x-full"),
        ])>
            <div class="p-6">
                <div class="flex justify-between items-center mb-8">
                    <h1 class="text-text-300 dark:text-text-dark-100">"S-BRAIN"</h1>
                    <button
                        class="text-3xl text-text-300 dark:text-text-dark-100 cursor-pointer"
                        aria-label="Close menu"
                        on:click=move |_| set_drawer_open.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <div class="border-t pt-6 text-text-300 dark:text-text-dark-100"></div>
                <Show when=signed_in>
                    <ul class="mb-8 space-y-4">
                        <CategoryLinks drawer=true on_navigate=move |_| set_drawer_open.set(false) />
                    </ul>
                </Show>
            </div>
        </nav>

        <ContentCreateModal open=create_open on_close=move |_| set_create_open.set(false) />
        <SignInUpModal open=ctx.login_open on_close=move |_| ctx.login_open.set(false) />
    }
}
