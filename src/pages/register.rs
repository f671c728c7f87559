//! Registration page gated by invite-code validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The invite code is checked on blur of its input or via the explicit
//! verify button, never per keystroke. Submission stays disabled until the
//! gate has approved the exact code currently in the form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::RegisterData;
use crate::state::auth::AuthState;
use crate::state::invite::{InviteStatus, check_invite_code};
use crate::util::auth::install_authed_redirect;
use crate::util::validate::validate_registration;

/// Registration form. Redirects home when already signed in.
///
/// An invite code arriving as a `?code=` query parameter (from a shared
/// invite link) pre-fills the code input.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let query = use_query_map();
    let invite_code = RwSignal::new(query.get_untracked().get("code").unwrap_or_default());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let invite_status = RwSignal::new(InviteStatus::default());

    let run_check = move || {
        leptos::task::spawn_local(check_invite_code(invite_code.get_untracked(), invite_status));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) =
            validate_registration(&password.get(), &confirm_password.get(), agree_terms.get())
        {
            error.set(message.to_owned());
            return;
        }
        let code = invite_code.get();
        if !invite_status.get().allows_submit(&code) {
            error.set("Please enter a valid invite code.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        let data = RegisterData {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            invite_code: code,
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::state::auth::register(auth, &data).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    let invite_verdict = move || {
        let status = invite_status.get();
        if !status.checked {
            return view! { <p class="auth-hint">"Registration requires an invite code from an existing member."</p> }
                .into_any();
        }
        let class = if status.valid {
            "auth-hint auth-hint--ok"
        } else {
            "auth-hint auth-hint--error"
        };
        let inviter = status
            .inviter_name
            .as_ref()
            .map(|name| format!(" (invited by {name})"))
            .unwrap_or_default();
        view! { <p class=class>{format!("{}{inviter}", status.message)}</p> }.into_any()
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <p class="auth-card__subtitle">"Join the community and start learning."</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Invite code"</label>
                    <div class="auth-field-row">
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Your invite code"
                            prop:value=move || invite_code.get()
                            on:input=move |ev| invite_code.set(event_target_value(&ev))
                            on:blur=move |_| run_check()
                        />
                        <button
                            class="auth-button auth-button--secondary"
                            type="button"
                            on:click=move |_| run_check()
                            disabled=move || busy.get()
                        >
                            "Verify"
                        </button>
                    </div>
                    {invite_verdict}
                    <label class="auth-label">"Username"</label>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="3-50 characters"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Password"</label>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="At least 8 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Confirm password"</label>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Repeat your password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <label class="auth-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || agree_terms.get()
                            on:change=move |ev| agree_terms.set(event_target_checked(&ev))
                        />
                        " I have read and agree to the terms of service and privacy policy."
                    </label>
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || {
                            busy.get() || !invite_status.get().allows_submit(&invite_code.get())
                        }
                    >
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already a member? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
