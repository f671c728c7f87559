//! Leaderboard page listing the top members by points.

use leptos::prelude::*;

use crate::net::types::UserPublic;

/// How many entries the page requests.
#[cfg(feature = "hydrate")]
const LEADERBOARD_LIMIT: u32 = 10;

/// Leaderboard page. Visible to everyone, signed in or not.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let entries = RwSignal::new(Vec::<UserPublic>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Fetch once on mount.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::get_leaderboard(LEADERBOARD_LIMIT).await {
                Ok(envelope) => entries.set(envelope.data),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    }

    let rows = move || {
        entries
            .get()
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let rank = index + 1;
                let href = format!("/users/{}", user.id);
                view! {
                    <li class="leaderboard__row">
                        <span class="leaderboard__rank">{rank}</span>
                        <a class="leaderboard__name" href=href>
                            {user.display_name().to_owned()}
                        </a>
                        <span class="leaderboard__level">"Lv. " {user.level}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="leaderboard-page">
            <h1>"Leaderboard"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="auth-message auth-message--error">{move || error.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <ol class="leaderboard">{rows}</ol>
            </Show>
        </div>
    }
}
