//! Content Edit Modal
//!
//! Pre-fills from the item each time it opens; validation messages are
//! shown under their fields.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sbrain_ui::style::{cn, ERROR_TEXT, HEADING, PANEL};
use sbrain_ui::{Button, ButtonVariant, LoadingSpinner, Modal};

use crate::components::ContentFields;
use crate::context::use_app_context;
use crate::forms::{self, ContentForm, FormState};
use crate::models::Content;
use crate::store::AppStateStoreFields;

#[component]
pub fn ContentEditModal(
    content: Content,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let content_id = content.id;
    let state = RwSignal::new(FormState::<ContentForm>::default());
    let pending = Signal::derive(move || state.with(|s| s.pending));
    let tags_loading = Signal::derive(move || ctx.store.tags().with(|t| t.is_empty()));

    let content = StoredValue::new(content);

    // Re-fill on every opening; keystrokes made while open are left alone
    Effect::new(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open && was_open != Some(true) {
            let form = ctx.store.tags().with_untracked(|tags| {
                content.with_value(|c| ContentForm::from_content(c, tags))
            });
            state.set(FormState::new(form));
        }
        is_open
    });

    // A tag list that arrives after opening only fills an empty selection
    Effect::new(move |_| {
        ctx.store.tags().with(|tags| {
            if tags.is_empty() || !open.get_untracked() || state.with_untracked(|s| !s.form.tag_id.is_empty()) {
                return;
            }
            state.update(|s| content.with_value(|c| s.form.fill_missing_tag(c, tags)));
        });
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = forms::submit_update(&api, content_id, &form).await;
            if state.try_update(|s| s.finish(result)).flatten().is_some() {
                ctx.invalidate();
                on_close.run(());
            }
        });
    };

    view! {
        <Modal open=open on_close=on_close>
            <div class=cn([PANEL, "w-[500px] max-w-[90vw] p-6 max-h-[90vh] overflow-y-auto"])>
                <h2 class=cn([HEADING, "mb-4"])>"Update Content"</h2>

                <form on:submit=submit class="space-y-5">
                    <ContentFields state=state inline_errors=true />

                    {move || state.with(|s| s.general_error()).map(|msg| view! { <p class=ERROR_TEXT>{msg}</p> })}

                    <div class="pt-2 flex gap-3">
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=on_close
                            disabled=pending
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
                                        "Updating..."
                                    </span>
                                }.into_any()
                            } else {
                                "Update Changes".into_any()
                            }}
                        </Button>
                    </div>
                </form>
            </div>
        </Modal>
    }
}
