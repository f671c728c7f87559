//! Landing page with a hero section and a leaderboard preview.

use leptos::prelude::*;

use crate::net::types::UserPublic;
use crate::state::auth::AuthState;

/// Entries shown in the landing-page preview.
#[cfg(feature = "hydrate")]
const PREVIEW_LIMIT: u32 = 5;

/// Landing page. Calls to action adapt to the session state.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let top_users = RwSignal::new(Vec::<UserPublic>::new());

    // Best-effort preview; failures just leave the list empty.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::get_leaderboard(PREVIEW_LIMIT).await {
                Ok(envelope) => top_users.set(envelope.data),
                Err(err) => leptos::logging::warn!("leaderboard preview failed: {err}"),
            }
        });
    }

    let actions = move || {
        if auth.get().is_authenticated() {
            view! {
                <a class="hero__action" href="/profile">
                    "Go to your profile"
                </a>
            }
            .into_any()
        } else {
            view! {
                <a class="hero__action" href="/register">
                    "Join with an invite code"
                </a>
                <a class="hero__action hero__action--secondary" href="/login">
                    "Sign in"
                </a>
            }
            .into_any()
        }
    };

    let preview = move || {
        top_users
            .get()
            .iter()
            .map(|user| {
                view! {
                    <li class="leaderboard__row">
                        <span class="leaderboard__name">{user.display_name().to_owned()}</span>
                        <span class="leaderboard__level">"Lv. " {user.level}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"StudyHub"</h1>
                <p class="hero__tagline">
                    "An invite-only community for learning together: courses, discussion, and shared progress."
                </p>
                <div class="hero__actions">{actions}</div>
            </section>
            <section class="home-page__leaderboard">
                <h2>"Top members"</h2>
                <ol class="leaderboard">{preview}</ol>
                <a href="/leaderboard">"Full leaderboard"</a>
            </section>
        </div>
    }
}
