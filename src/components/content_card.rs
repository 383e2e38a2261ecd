//! Content Card
//!
//! One saved item in the listing grid, with its edit and delete dialogs.

use leptos::prelude::*;
use sbrain_ui::style::{cn, when};
use sbrain_ui::{Button, ButtonVariant};

use crate::components::{ContentEditModal, DeleteModal};
use crate::models::Content;

const TITLE_LIMIT: usize = 30;
const BODY_LIMIT: usize = 150;

/// Cut `text` to `max` characters, appending "..." when anything was dropped
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        log::warn!("[CARD] Failed to open {}: {:?}", url, e);
    }
}

#[component]
pub fn ContentCard(content: Content) -> impl IntoView {
    let (delete_open, set_delete_open) = signal(false);
    let (edit_open, set_edit_open) = signal(false);

    let has_link = content.has_link();
    let url = content.open_url().map(str::to_string);
    let no_url = url.is_none();
    let open_link = Callback::new(move |_: ()| {
        if let Some(url) = url.as_deref() {
            open_in_new_tab(url);
        }
    });

    view! {
        <div class="relative bg-white dark:bg-[#1a1a1a] rounded-xl shadow-lg border border-gray-200 dark:border-gray-800 p-6 hover:shadow-xl transition-shadow duration-300">
            <div class="absolute top-4 left-4 flex gap-3">
                <button
                    class="p-2 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors cursor-pointer"
                    aria-label="Delete content"
                    title="Delete content"
                    on:click=move |_| set_delete_open.set(true)
                >
                    <span class="text-red-600 dark:text-red-400 text-xl">"🗑"</span>
                </button>
                <button
                    class="p-2 rounded-lg hover:bg-blue-50 dark:hover:bg-blue-900/20 transition-colors cursor-pointer"
                    aria-label="Edit content"
                    title="Edit content"
                    on:click=move |_| set_edit_open.set(true)
                >
                    <span class="text-blue-600 dark:text-blue-400 text-xl">"✎"</span>
                </button>
            </div>

            <div class="absolute top-4 right-4">
                <button class="p-2 rounded-lg" aria-label="Shareable link" title="Shareable link" disabled=true>
                    <span class=cn([
                        "text-xl",
                        when(has_link, "text-green-500 dark:text-green-400"),
                        when(!has_link, "text-gray-400 dark:text-gray-600"),
                    ])>"🔗"</span>
                </button>
            </div>

            <div class="mt-8 space-y-4">
                <div>
                    <h3 class="text-lg font-semibold text-gray-800 dark:text-gray-100 mb-2" title=content.title.clone()>
                        {truncate(&content.title, TITLE_LIMIT)}
                    </h3>
                    <p class="text-sm h-15 text-gray-500 dark:text-gray-400 line-clamp-3" title=content.content.clone()>
                        {truncate(&content.content, BODY_LIMIT)}
                    </p>
                </div>

                <div class="flex items-center justify-between pt-2 border-t border-gray-200 dark:border-gray-700">
                    <span class="text-xs px-2 py-1 rounded-full bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300">
                        {content.tag.clone()}
                    </span>
                    <Button
                        variant=ButtonVariant::Secondary
                        title="Open link in separate tab"
                        disabled=no_url
                        on_click=open_link
                        class="flex items-center gap-2 text-sm"
                    >
                        <span>"Open Link"</span>
                        <span class="text-base">"↗"</span>
                    </Button>
                </div>
            </div>
        </div>

        <DeleteModal content_id=content.id open=delete_open on_close=move |_| set_delete_open.set(false) />
        <ContentEditModal content=content open=edit_open on_close=move |_| set_edit_open.set(false) />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Hooks", 30), "Hooks");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn test_truncate_counts_characters() {
        // Each of these is multiple bytes
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("日本語のテキスト", 3), "日本語...");
    }
}
