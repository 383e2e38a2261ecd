//! Content Create Modal
//!
//! Form for saving a new content item. Each submission carries a fresh
//! idempotency key.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sbrain_ui::style::{cn, ERROR_TEXT};
use sbrain_ui::{Button, ButtonVariant, LoadingSpinner, Modal};

use crate::components::ContentFields;
use crate::context::use_app_context;
use crate::forms::{self, ContentForm, FormState};
use crate::store::AppStateStoreFields;

#[component]
pub fn ContentCreateModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(FormState::<ContentForm>::default());
    let pending = Signal::derive(move || state.with(|s| s.pending));
    let tags_loading = Signal::derive(move || ctx.store.tags().with(|t| t.is_empty()));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = forms::submit_create(&api, &form).await;
            if state.try_update(|s| s.finish_and_clear(result)).flatten().is_some() {
                ctx.invalidate();
                if let Some(cb) = on_success {
                    cb.run(());
                }
                on_close.run(());
            }
        });
    };

    view! {
        <Modal open=open on_close=on_close>
            <div class=cn(["w-[350px] sm:w-[400px] bg-white dark:bg-[#1a1a1a] rounded-xl shadow-xl border border-gray-100 dark:border-gray-800 overflow-hidden flex flex-col"])>
                <div class="px-6 py-5 border-b border-gray-100 dark:border-gray-800">
                    <h2 class="text-lg font-semibold text-gray-800 dark:text-gray-100">"Add New Content"</h2>
                    <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">"Save your favorite links and ideas."</p>
                </div>

                <form on:submit=submit class="p-6 space-y-5">
                    <ContentFields state=state />

                    {move || state.with(|s| s.summary()).map(|msg| view! { <p class=ERROR_TEXT>{msg}</p> })}

                    <div class="pt-2 flex gap-3">
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=on_close
                            class="flex-1 bg-black text-white hover:bg-gray-800 dark:bg-gray-800 dark:hover:bg-gray-700"
                        >
                            "Cancel"
                        </Button>
                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || pending.get() || tags_loading.get())
                            class="flex-1"
                        >
                            {move || if pending.get() {
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <LoadingSpinner />
                                        "Adding..."
                                    </span>
                                }.into_any()
                            } else {
                                "Create Content".into_any()
                            }}
                        </Button>
                    </div>
                </form>
            </div>
        </Modal>
    }
}
