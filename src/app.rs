//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    home::HomePage, leaderboard::LeaderboardPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, user::UserPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single session-state container, kicks off the initial session
/// resolve, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve the session from any stored token as soon as we are live in
    // the browser. SSR leaves the state unresolved; hydration settles it.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::state::auth::refresh_user(auth).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/studyhub.css"/>
        <Title text="StudyHub"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                <Route path=(StaticSegment("users"), ParamSegment("id")) view=UserPage/>
            </Routes>
        </Router>
    }
}
