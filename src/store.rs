//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Tag;
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, `None` when logged out
    pub session: Option<Session>,
    /// Tag reference list for the content forms
    pub tags: Vec<Tag>,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    store.session().set(session);
}

pub fn store_set_tags(store: &AppStore, tags: Vec<Tag>) {
    store.tags().set(tags);
}

/// Bearer token of the current session, without tracking
pub fn store_token(store: &AppStore) -> Option<String> {
    store.session().with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
}

pub fn store_is_authenticated(store: &AppStore) -> bool {
    store.session().with(|s| s.is_some())
}
