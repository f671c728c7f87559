//! Public profile page for a single member, addressed by numeric id.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::UserPublic;

#[cfg(any(test, feature = "hydrate"))]
fn parse_user_id(raw: Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|value| value.parse::<i64>().ok())
}

/// Public member profile page.
#[component]
pub fn UserPage() -> impl IntoView {
    let params = use_params_map();
    let profile = RwSignal::new(None::<UserPublic>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let user_id = parse_user_id(params.get_untracked().get("id"));
        leptos::task::spawn_local(async move {
            let Some(user_id) = user_id else {
                error.set("User not found.".to_owned());
                return;
            };
            match crate::net::api::get_user_profile(user_id).await {
                Ok(envelope) => profile.set(Some(envelope.data)),
                Err(err) => error.set(err.to_string()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    let card = move || {
        profile.get().map(|user| {
            view! {
                <div class="profile-card">
                    <h2>{user.display_name().to_owned()}</h2>
                    <p class="profile-card__row">"Level " {user.level}</p>
                    <p class="profile-card__row">"Role: " {user.role.clone()}</p>
                    <p class="profile-card__row">"Member since " {user.created_at.clone()}</p>
                    {user.bio.clone().map(|bio| view! { <p class="profile-card__row">{bio}</p> })}
                </div>
            }
        })
    };

    view! {
        <div class="profile-page">
            <Show when=move || !error.get().is_empty()>
                <p class="auth-message auth-message--error">{move || error.get()}</p>
            </Show>
            <Show when=move || profile.get().is_some() fallback=|| view! { <p>"Loading..."</p> }>
                {card}
            </Show>
        </div>
    }
}
