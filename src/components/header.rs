//! Site header with navigation and auth-aware account actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Top navigation bar.
///
/// Anonymous visitors get sign-in/register links; signed-in users get a
/// profile link under their display name and a synchronous sign-out button.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |user| user.display_name().to_owned())
    };

    let on_logout = move |_| {
        crate::state::auth::logout(auth);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a class="site-header__brand" href="/">
                    "StudyHub"
                </a>
                <a class="site-header__link" href="/leaderboard">
                    "Leaderboard"
                </a>
            </nav>
            <div class="site-header__actions">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <a class="site-header__link" href="/login">
                                "Sign in"
                            </a>
                            <a class="site-header__link site-header__link--primary" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="site-header__link" href="/profile">
                        {display_name}
                    </a>
                    <button class="site-header__button" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
