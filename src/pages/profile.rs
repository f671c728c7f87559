//! Member profile page: account details, points, invites, profile editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is a member-only route. Points, invite-code info, and invited users
//! load once the session resolves; the edit form PUTs a partial patch and
//! then refreshes the session profile so every subscriber sees the update.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{InviteCodeInfo, PointsSummary, ProfilePatch, UserPublic};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Map an edit-form field to a patch entry; empty input means "leave as is".
fn patch_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Profile page for the signed-in user.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let points = RwSignal::new(None::<PointsSummary>);
    let invite_info = RwSignal::new(None::<InviteCodeInfo>);
    let invited_users = RwSignal::new(Vec::<UserPublic>::new());
    let load_error = RwSignal::new(String::new());

    // Load member data once the session has resolved to a user. The awaits
    // are sequential on purpose; nothing here races anything else.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !auth.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        leptos::task::spawn_local(async move {
            match api::get_my_points().await {
                Ok(envelope) => points.set(Some(envelope.data)),
                Err(err) => load_error.set(err.to_string()),
            }
            match api::get_my_invite_code().await {
                Ok(envelope) => invite_info.set(Some(envelope.data)),
                Err(err) => load_error.set(err.to_string()),
            }
            match api::get_my_invited_users().await {
                Ok(envelope) => invited_users.set(envelope.data),
                Err(err) => load_error.set(err.to_string()),
            }
        });
    });

    // Edit-form fields, seeded from the profile once it arrives.
    let nickname = RwSignal::new(String::new());
    let avatar = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let save_message = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        if let Some(user) = auth.get().user {
            nickname.set(user.nickname.unwrap_or_default());
            avatar.set(user.avatar.unwrap_or_default());
            bio.set(user.bio.unwrap_or_default());
            seeded.set(true);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        save_message.set(String::new());
        let patch = ProfilePatch {
            nickname: patch_field(&nickname.get()),
            avatar: patch_field(&avatar.get()),
            bio: patch_field(&bio.get()),
            phone: patch_field(&phone.get()),
        };
        leptos::task::spawn_local(async move {
            match api::update_current_user(&patch).await {
                Ok(_) => {
                    crate::state::auth::refresh_user(auth).await;
                    save_message.set("Profile updated.".to_owned());
                }
                Err(err) => save_message.set(err.to_string()),
            }
            saving.set(false);
        });
    };

    let account_rows = move || {
        auth.get().user.map(|user| {
            view! {
                <div class="profile-card">
                    <h2>{user.display_name().to_owned()}</h2>
                    <p class="profile-card__row">"Username: " {user.username.clone()}</p>
                    <p class="profile-card__row">"Email: " {user.email.clone()}</p>
                    <p class="profile-card__row">
                        "Level " {user.level} " / " {user.experience} " XP"
                    </p>
                    <p class="profile-card__row">"Member since " {user.created_at.clone()}</p>
                    <p class="profile-card__row">"Invited " {user.invited_count} " members"</p>
                </div>
            }
        })
    };

    let points_card = move || {
        points.get().map(|summary| {
            view! {
                <div class="profile-card">
                    <h3>"Points"</h3>
                    <p class="profile-card__row">{summary.points} " available"</p>
                    <p class="profile-card__row">{summary.total_earned} " earned in total"</p>
                </div>
            }
        })
    };

    let invite_card = move || {
        invite_info.get().map(|info| {
            let invited = invited_users.get();
            view! {
                <div class="profile-card">
                    <h3>"Your invite code"</h3>
                    <code class="profile-card__code">{info.code.clone()}</code>
                    <p class="profile-card__row">
                        {info.remaining_quota} " registrations remaining"
                    </p>
                    <ul class="profile-card__list">
                        {invited
                            .iter()
                            .map(|user| {
                                view! { <li>{user.display_name().to_owned()}</li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! {
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to sign in..." }
                            }}
                        </p>
                    }
                }
            >
                <Show when=move || !load_error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || load_error.get()}</p>
                </Show>
                {account_rows}
                {points_card}
                {invite_card}
                <div class="profile-card">
                    <h3>"Edit profile"</h3>
                    <Show when=move || !save_message.get().is_empty()>
                        <p class="auth-message">{move || save_message.get()}</p>
                    </Show>
                    <form class="auth-form" on:submit=on_save>
                        <label class="auth-label">"Nickname"</label>
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || nickname.get()
                            on:input=move |ev| nickname.set(event_target_value(&ev))
                        />
                        <label class="auth-label">"Avatar URL"</label>
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || avatar.get()
                            on:input=move |ev| avatar.set(event_target_value(&ev))
                        />
                        <label class="auth-label">"Bio"</label>
                        <textarea
                            class="auth-input"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                        <label class="auth-label">"Phone"</label>
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
