//! Delete Confirmation Modal

use leptos::prelude::*;
use leptos::task::spawn_local;
use sbrain_ui::style::{cn, ERROR_TEXT, HEADING, PANEL};
use sbrain_ui::{Button, ButtonVariant, LoadingSpinner, Modal};

use crate::context::use_app_context;
use crate::forms::{self, FormState};

/// Asks before deleting one content item
#[component]
pub fn DeleteModal(
    content_id: u32,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(FormState::<()>::default());
    let pending = Signal::derive(move || state.with(|s| s.pending));

    let confirm = Callback::new(move |_: ()| {
        if state.try_update(|s| s.begin_submit()).flatten().is_none() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = forms::submit_delete(&api, content_id).await;
            if state.try_update(|s| s.finish(result)).flatten().is_some() {
                ctx.invalidate();
                on_close.run(());
            }
        });
    });

    view! {
        <Modal open=open on_close=on_close>
            <div class=cn([PANEL, "w-[400px] max-w-[90vw] p-6"])>
                <h2 class=cn([HEADING, "mb-4"])>"Delete Content"</h2>
                <p class="text-gray-600 dark:text-gray-400 mb-6">
                    "Are you sure you want to delete this content? This action cannot be undone."
                </p>

                {move || state.with(|s| s.general_error()).map(|msg| view! { <p class=cn([ERROR_TEXT, "mb-4"])>{msg}</p> })}

                <div class="flex gap-3 justify-end">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=on_close
                        disabled=pending
                        class="bg-black text-white hover:bg-gray-800 dark:bg-gray-800 dark:hover:bg-gray-700"
                    >
                        "No"
                    </Button>
                    <Button variant=ButtonVariant::Danger on_click=confirm disabled=pending>
                        {move || if pending.get() {
                            view! {
                                <span class="flex items-center gap-2">
                                    <LoadingSpinner />
                                    "Deleting..."
                                </span>
                            }.into_any()
                        } else {
                            "Yes".into_any()
                        }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
