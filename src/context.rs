//! Application Context
//!
//! Shared state provided via Leptos Context API: the store, configuration,
//! the listing cache and its reload trigger, and the login dialog flag.

use leptos::prelude::*;
use sbrain_ui::storage::BrowserStorage;

use crate::api::HttpApi;
use crate::cache::QueryCache;
use crate::config::AppConfig;
use crate::models::{ContentPage, ContentQuery};
use crate::session::Session;
use crate::store::{self, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
    cache: StoredValue<QueryCache<ContentQuery, ContentPage>>,
    /// Bumped on every cache invalidation - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped on every cache invalidation - write
    set_reload_trigger: WriteSignal<u32>,
    /// Whether the sign-in dialog is showing
    pub login_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            store,
            config: StoredValue::new(config),
            cache: StoredValue::new(QueryCache::new()),
            reload_trigger,
            set_reload_trigger,
            login_open: RwSignal::new(false),
        }
    }

    /// Client carrying the current bearer token
    pub fn api(&self) -> HttpApi {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        HttpApi::new(base_url, store::store_token(&self.store))
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|c| c.page_size)
    }

    pub fn is_authenticated(&self) -> bool {
        store::store_is_authenticated(&self.store)
    }

    // ========================
    // Listing Cache
    // ========================

    pub fn cached_page(&self, query: &ContentQuery) -> Option<ContentPage> {
        self.cache.with_value(|c| c.get(query))
    }

    pub fn cache_generation(&self) -> u32 {
        self.cache.with_value(|c| c.generation())
    }

    pub fn cache_page(&self, query: ContentQuery, page: ContentPage, generation: u32) {
        self.cache.update_value(|c| {
            if !c.insert(query, page, generation) {
                log::debug!("[CACHE] Dropped stale page {:?}", query);
            }
        });
    }

    /// Drop cached listings and make listing views refetch
    pub fn invalidate(&self) {
        self.cache.update_value(|c| c.invalidate());
        self.set_reload_trigger.update(|v| *v += 1);
    }

    // ========================
    // Session
    // ========================

    pub fn sign_in(&self, session: Session) {
        session.save(&BrowserStorage);
        log::info!("[SESSION] Signed in as {} ({})", session.name, session.user_id);
        store::store_set_session(&self.store, Some(session));
        self.invalidate();
    }

    pub fn sign_out(&self) {
        Session::clear(&BrowserStorage);
        store::store_set_session(&self.store, None);
        store::store_set_tags(&self.store, Vec::new());
        self.invalidate();
        log::info!("[SESSION] Signed out");
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
