//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage,
    features::{GalleryPage, TimelinePage, WishlistPage},
    login::LoginPage,
    settings::SettingsPage,
};
use crate::util::context::{provide_session, provide_space_mode};

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
/// Provides the session and space-mode stores, starts the initial identity
/// check in the browser, and sets up client-side routing. Server rendering
/// leaves the session `Pending`, so guarded routes pre-render the loading
/// indicator and hydrate without a mismatch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session();
    provide_space_mode();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::check_session(&crate::net::identity::BROWSER_IDENTITY, &session).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/memoir.css"/>
        <Title text="Memoir"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("timeline") view=TimelinePage/>
                <Route path=StaticSegment("wishlist") view=WishlistPage/>
                <Route path=StaticSegment("gallery") view=GalleryPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
