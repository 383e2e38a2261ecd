//! Sign In / Sign Up Modal
//!
//! One dialog with two modes. A successful submission stores the session
//! and lands on the dashboard.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use sbrain_ui::style::{cn, ERROR_TEXT, HEADING, MUTED_TEXT, PANEL};
use sbrain_ui::{Button, Input, InputVariant, LoadingSpinner, Modal};

use crate::context::use_app_context;
use crate::forms::{self, AuthDialog, AuthForm, AuthMode};

fn auth_input(
    dialog: RwSignal<AuthDialog>,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    get: fn(&AuthForm) -> &String,
    set: fn(&mut AuthForm, String),
) -> impl IntoView {
    let pending = Signal::derive(move || dialog.with(|d| d.state.pending));
    view! {
        <Input
            label=label
            placeholder=placeholder
            input_type=input_type
            variant=InputVariant::Login
            disabled=pending
            value=Signal::derive(move || dialog.with(|d| get(&d.state.form).clone()))
            on_input=Callback::new(move |v: String| dialog.update(|d| set(&mut d.state.form, v)))
        />
    }
}

#[component]
pub fn SignInUpModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new_local(use_navigate());
    let dialog = RwSignal::new(AuthDialog::default());
    let mode = Signal::derive(move || dialog.with(|d| d.mode));
    let pending = Signal::derive(move || dialog.with(|d| d.state.pending));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((mode, form)) = dialog
            .try_update(|d| d.state.begin_submit().map(|form| (d.mode, form)))
            .flatten()
        else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = forms::submit_auth(&api, mode, &form).await;
            if let Some(session) = dialog.try_update(|d| d.state.finish(result)).flatten() {
                ctx.sign_in(session);
                if let Some(cb) = on_success {
                    cb.run(());
                }
                on_close.run(());
                navigate.with_value(|nav| nav("/dashboard", NavigateOptions::default()));
            }
        });
    };

    let toggle = move |_: MouseEvent| dialog.update(|d| d.toggle_mode());

    view! {
        <Modal open=open on_close=on_close>
            <div class=cn([PANEL, "w-[360px] max-w-[90vw] p-6"])>
                <h2 class=cn([HEADING, "mb-1 text-center"])>
                    {move || match mode.get() {
                        AuthMode::SignIn => "Welcome Back",
                        AuthMode::SignUp => "Create Account",
                    }}
                </h2>
                <p class=cn([MUTED_TEXT, "mb-6 text-center"])>
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign in to your second brain",
                        AuthMode::SignUp => "Start saving what matters",
                    }}
                </p>

                <form on:submit=submit class="space-y-4">
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        {auth_input(dialog, "Name", "Enter your name", "text", |f| &f.name, |f, v| f.name = v)}
                    </Show>
                    {auth_input(dialog, "Email", "Enter your email", "email", |f| &f.email, |f, v| f.email = v)}
                    {auth_input(dialog, "Password", "Enter your password", "password", |f| &f.password, |f, v| f.password = v)}

                    {move || dialog.with(|d| d.state.summary()).map(|msg| view! { <p class=ERROR_TEXT>{msg}</p> })}

                    <Button button_type="submit" disabled=pending class="w-full">
                        {move || match (pending.get(), mode.get()) {
                            (true, _) => view! {
                                <span class="flex items-center justify-center gap-2">
                                    <LoadingSpinner />
                                    "Please wait..."
                                </span>
                            }.into_any(),
                            (false, AuthMode::SignIn) => "Sign In".into_any(),
                            (false, AuthMode::SignUp) => "Sign Up".into_any(),
                        }}
                    </Button>
                </form>

                <p class=cn([MUTED_TEXT, "mt-4 text-center"])>
                    {move || match mode.get() {
                        AuthMode::SignIn => "Don't have an account? ",
                        AuthMode::SignUp => "Already have an account? ",
                    }}
                    <button
                        type="button"
                        class="text-purple-600 dark:text-purple-400 font-medium hover:underline cursor-pointer disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=toggle
                    >
                        {move || match mode.get() {
                            AuthMode::SignIn => "Sign Up",
                            AuthMode::SignUp => "Sign In",
                        }}
                    </button>
                </p>
            </div>
        </Modal>
    }
}
