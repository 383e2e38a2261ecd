//! Content Listing Page
//!
//! `/dashboard/:category`: one page of the user's content filtered by the
//! category's tag, served from the query cache when possible.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use sbrain_ui::style::{ERROR_TEXT, MUTED_TEXT};
use sbrain_ui::{LoadingSpinner, Pagination, SpinnerSize};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::api::ContentApi;
use crate::components::ContentCard;
use crate::context::use_app_context;
use crate::models::{Category, ContentPage, ContentQuery};

const FAILED_MESSAGE: &str = "Failed to load content. Please try again later.";
const EMPTY_MESSAGE: &str = "No content found.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    Loading,
    Failed,
    Loaded(ContentPage),
}

/// Ticket counter; only the most recently issued ticket may apply its result
#[derive(Debug, Default)]
struct LatestRequest {
    issued: u64,
}

impl LatestRequest {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.issued == ticket
    }
}

/// Page the user picked, remembered with the category it was picked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageCursor {
    category: Option<Category>,
    page: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { category: None, page: 1 }
    }
}

impl PageCursor {
    /// A category other than the one the page was picked in starts at 1
    fn page_for(self, category: Option<Category>) -> u32 {
        if self.category == category { self.page.max(1) } else { 1 }
    }
}

fn listing_query(category: Category, page: u32, limit: u32) -> ContentQuery {
    ContentQuery { page: page.max(1), limit, tag_id: category.tag_id() }
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn centered(content: impl IntoView + 'static) -> AnyView {
    view! { <div class="flex justify-center items-center min-h-[400px]">{content}</div> }.into_any()
}

#[component]
pub fn ContentListing() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let category = Memo::new(move |_| {
        params.with(|p| p.get("category")).and_then(|slug| Category::from_slug(&slug))
    });

    let (cursor, set_cursor) = signal(PageCursor::default());
    let page = Memo::new(move |_| cursor.get().page_for(category.get()));
    let state = RwSignal::new(ListingState::Loading);
    let latest = StoredValue::new(LatestRequest::default());

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        let Some(category) = category.get() else {
            return;
        };
        let query = listing_query(category, page.get(), ctx.page_size());
        let ticket = latest.try_update_value(|l| l.issue()).unwrap_or_default();

        if let Some(cached) = ctx.cached_page(&query) {
            log::debug!("[LISTING] Cache hit {:?}", query);
            state.set(ListingState::Loaded(cached));
            return;
        }

        log::debug!("[LISTING] Fetching {:?}", query);
        state.set(ListingState::Loading);
        let generation = ctx.cache_generation();
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_contents(&query).await;
            if !latest.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                log::debug!("[LISTING] Discarded stale response for {:?}", query);
                return;
            }
            match result {
                Ok(loaded) => {
                    ctx.cache_page(query, loaded.clone(), generation);
                    state.try_set(ListingState::Loaded(loaded));
                }
                Err(e) => {
                    log::warn!("[LISTING] Failed to load {:?}: {}", query, e);
                    state.try_set(ListingState::Failed);
                }
            }
        });
    });

    let on_page_change = Callback::new(move |target: u32| {
        set_cursor.set(PageCursor { category: category.get_untracked(), page: target });
        scroll_to_top();
    });

    let title = move || category.get().map(Category::label).unwrap_or("Not Found");

    view! {
        <div class="m-auto max-w-[1536px] w-full min-h-screen h-full px-4 pt-24 pb-8">
            <div class="mb-8">
                <h1 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-2">{title}</h1>
            </div>

            {move || {
                if category.get().is_none() {
                    return centered(view! { <p class=MUTED_TEXT>"Page not found."</p> });
                }
                match state.get() {
                    ListingState::Loading => centered(view! { <LoadingSpinner size=SpinnerSize::Lg /> }),
                    ListingState::Failed => centered(view! { <p class=ERROR_TEXT>{FAILED_MESSAGE}</p> }),
                    ListingState::Loaded(data) if data.contents.is_empty() => {
                        centered(view! { <p class=MUTED_TEXT>{EMPTY_MESSAGE}</p> })
                    }
                    ListingState::Loaded(data) => {
                        let ContentPage { contents, total_links, total_pages, has_previous_page, has_next_page, .. } = data;
                        let count = contents.len();
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 mb-8">
                                <For
                                    each=move || contents.clone()
                                    key=|content| content.id
                                    children=|content| view! { <ContentCard content=content /> }
                                />
                            </div>
                            <Pagination
                                current_page=page
                                total_pages=total_pages
                                total_items=total_links
                                current_items_count=count
                                has_previous_page=has_previous_page
                                has_next_page=has_next_page
                                on_page_change=on_page_change
                            />
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_query_uses_category_tag() {
        assert_eq!(
            listing_query(Category::Docs, 2, 12),
            ContentQuery { page: 2, limit: 12, tag_id: Some(3) }
        );
        assert_eq!(listing_query(Category::All, 1, 12).tag_id, None);
    }

    #[test]
    fn test_listing_query_clamps_page() {
        assert_eq!(listing_query(Category::Links, 0, 12).page, 1);
    }

    #[test]
    fn test_page_cursor_keeps_page_within_category() {
        let cursor = PageCursor { category: Some(Category::Docs), page: 4 };
        assert_eq!(cursor.page_for(Some(Category::Docs)), 4);
    }

    #[test]
    fn test_page_cursor_starts_other_category_at_first_page() {
        let cursor = PageCursor { category: Some(Category::Docs), page: 4 };
        assert_eq!(cursor.page_for(Some(Category::Links)), 1);
        assert_eq!(cursor.page_for(None), 1);
        assert_eq!(PageCursor::default().page_for(Some(Category::All)), 1);
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let mut latest = LatestRequest::default();
        let first = latest.issue();
        let second = latest.issue();
        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
    }
}
