//! Theme
//!
//! Light/dark preference. Persisted under [`THEME_KEY`] and applied as the
//! `dark` class on the document root element.

use leptos::prelude::*;

use crate::storage::{BrowserStorage, KeyValueStorage};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference, falling back to the system setting
    pub fn initial(storage: &impl KeyValueStorage, prefers_dark: bool) -> Self {
        storage
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }

    pub fn persist(self, storage: &impl KeyValueStorage) {
        storage.set(THEME_KEY, self.as_str());
    }
}

/// `prefers-color-scheme: dark` media query
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", theme == Theme::Dark);
    }
}

/// Sun/moon button flipping the theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::initial(&BrowserStorage, system_prefers_dark()));

    Effect::new(move |_| apply_theme(theme.get()));

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        next.persist(&BrowserStorage);
        log::debug!("[THEME] Switched to {}", next.as_str());
        set_theme.set(next);
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-full cursor-pointer text-text-300 dark:text-text-dark-100 hover:bg-black/5 dark:hover:bg-white/10 transition-colors"
            title=move || if theme.get() == Theme::Dark { "Switch to light theme" } else { "Switch to dark theme" }
            aria-label="Toggle theme"
            on:click=toggle
        >
            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_initial_prefers_stored_value() {
        let storage = MemoryStorage::new();
        storage.set(THEME_KEY, "light");
        assert_eq!(Theme::initial(&storage, true), Theme::Light);
    }

    #[test]
    fn test_initial_falls_back_to_system() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::initial(&storage, true), Theme::Dark);
        assert_eq!(Theme::initial(&storage, false), Theme::Light);

        storage.set(THEME_KEY, "sepia");
        assert_eq!(Theme::initial(&storage, false), Theme::Light);
    }

    #[test]
    fn test_toggle_and_persist() {
        let storage = MemoryStorage::new();
        let theme = Theme::Light.toggled();
        theme.persist(&storage);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(theme.toggled(), Theme::Light);
    }
}
