//! S-Brain Frontend App
//!
//! Root component: provides the store and app context, loads the tag list
//! for signed-in users, and routes between pages under a fixed header.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use sbrain_ui::storage::BrowserStorage;

use crate::api::TagApi;
use crate::components::Header;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{ContentListing, Dashboard, Home};
use crate::session::Session;
use crate::store::{self, AppState};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="m-auto w-full min-h-screen flex justify-center items-center">
            <p class="text-gray-500 dark:text-gray-400">"Page not found."</p>
        </div>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(Session::load(&BrowserStorage)));
    provide_context(store);
    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    // Tag list follows the session
    Effect::new(move |_| {
        if !store::store_is_authenticated(&store) {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.list_tags().await {
                Ok(tags) => {
                    log::debug!("[APP] Loaded {} tags", tags.len());
                    store::store_set_tags(&store, tags);
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("[APP] Stored session rejected, signing out");
                    ctx.sign_out();
                }
                Err(e) => log::warn!("[APP] Failed to load tags: {}", e),
            }
        });
    });

    view! {
        <Router>
            <Header />
            <main class="bg-white dark:bg-black/85 min-h-screen text-gray-900 dark:text-gray-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/dashboard") view=Dashboard />
                    <Route path=path!("/dashboard/:category") view=ContentListing />
                </Routes>
            </main>
        </Router>
    }
}
