//! Pagination Control
//!
//! Sliding window of page buttons around the current page, with optional
//! first/last shortcuts and ellipses. Window placement is computed by
//! [`page_window`]; [`page_controls`] turns it into the ordered control
//! sequence the component renders.

use std::ops::RangeInclusive;

use leptos::prelude::*;

use crate::style::{cn, when};

/// Maximum number of numbered buttons in the window
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Inputs describing where the listing currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// One rendered control, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: u32, disabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, disabled: bool },
}

/// Contiguous page numbers to show.
///
/// The window is centered on `current_page` when possible and shifted left
/// when it would run past `total_pages`, never starting below 1.
pub fn page_window(current_page: u32, total_pages: u32, max_visible: u32) -> RangeInclusive<u32> {
    let total = total_pages.max(1);
    let max_visible = max_visible.max(1);
    let current = current_page.clamp(1, total);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    start..=end
}

/// Full control sequence, empty when there is at most one page
pub fn page_controls(info: &PageInfo) -> Vec<PageControl> {
    let PageInfo { current_page, total_pages, has_previous_page, has_next_page } = *info;
    if total_pages <= 1 {
        return Vec::new();
    }

    let window = page_window(current_page, total_pages, MAX_VISIBLE_PAGES);
    let (start, end) = (*window.start(), *window.end());
    let mut controls = Vec::with_capacity(MAX_VISIBLE_PAGES as usize + 6);

    controls.push(PageControl::Previous {
        target: current_page.saturating_sub(1),
        disabled: !has_previous_page || current_page <= 1,
    });

    if start > 1 {
        controls.push(PageControl::Page { number: 1, active: false });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.extend(window.map(|number| PageControl::Page {
        number,
        active: number == current_page,
    }));

    if end < total_pages {
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page { number: total_pages, active: false });
    }

    controls.push(PageControl::Next {
        target: current_page + 1,
        disabled: !has_next_page || current_page >= total_pages,
    });

    controls
}

const BUTTON_BASE: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
const BUTTON_IDLE: &str = "bg-white dark:bg-[#1a1a1a] text-gray-700 dark:text-gray-300 border border-gray-300 dark:border-gray-600 hover:bg-gray-50 dark:hover:bg-gray-800";
const BUTTON_ACTIVE: &str = "bg-blue-600 text-white border border-blue-600";
const BUTTON_DISABLED: &str = "bg-gray-100 dark:bg-gray-800 text-gray-400 dark:text-gray-600 border border-gray-200 dark:border-gray-700 cursor-not-allowed";

fn render_control(control: PageControl, on_page_change: Callback<u32>) -> AnyView {
    match control {
        PageControl::Previous { target, disabled } | PageControl::Next { target, disabled } => {
            let label = if matches!(control, PageControl::Previous { .. }) { "Previous" } else { "Next" };
            let class = cn([BUTTON_BASE, if disabled { BUTTON_DISABLED } else { BUTTON_IDLE }]);
            view! {
                <button
                    type="button"
                    class=class
                    disabled=disabled
                    on:click=move |_| {
                        if !disabled {
                            on_page_change.run(target);
                        }
                    }
                >
                    {label}
                </button>
            }
            .into_any()
        }
        PageControl::Page { number, active } => {
            let class = cn([BUTTON_BASE, when(active, BUTTON_ACTIVE), when(!active, BUTTON_IDLE)]);
            view! {
                <button
                    type="button"
                    class=class
                    aria-current=if active { Some("page") } else { None }
                    on:click=move |_| on_page_change.run(number)
                >
                    {number}
                </button>
            }
            .into_any()
        }
        PageControl::Ellipsis => view! { <span class="px-2 text-gray-500">"..."</span> }.into_any(),
    }
}

/// Page navigation bar with an item-count summary
#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total_items: Signal<u32>,
    #[prop(into)] current_items_count: Signal<usize>,
    #[prop(into)] has_previous_page: Signal<bool>,
    #[prop(into)] has_next_page: Signal<bool>,
    #[prop(into)] on_page_change: Callback<u32>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container_class = cn([
        "flex flex-col md:flex-row justify-between items-center gap-4 mt-8 pt-4 border-t border-gray-200 dark:border-gray-800",
        class.as_str(),
    ]);

    let controls = move || {
        page_controls(&PageInfo {
            current_page: current_page.get(),
            total_pages: total_pages.get(),
            has_previous_page: has_previous_page.get(),
            has_next_page: has_next_page.get(),
        })
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class=container_class.clone() aria-label="Pagination">
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {move || format!("Showing {} of {} items", current_items_count.get(), total_items.get())}
                </p>
                <div class="flex justify-center items-center gap-2 flex-wrap">
                    {move || {
                        controls()
                            .into_iter()
                            .map(|control| render_control(control, on_page_change))
                            .collect_view()
                    }}
                </div>
            </nav>
        </Show>
    }
}
