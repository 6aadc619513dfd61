//! Page chrome for guarded routes: header, space-aware navigation, sign-out.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::notice::configuration_notice;
use crate::components::space_toggle::SpaceToggle;
use crate::net::identity::BROWSER_IDENTITY;
use crate::state::session::{SessionState, sign_out};
use crate::state::space_mode::{SpaceMode, SpaceModeStore};
use crate::util::context::{use_session, use_space_mode};

/// One entry in the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const DASHBOARD: NavItem = NavItem { label: "Home", path: "/" };
const TIMELINE: NavItem = NavItem { label: "Timeline", path: "/timeline" };
const WISHLIST: NavItem = NavItem { label: "Wishlist", path: "/wishlist" };
const GALLERY: NavItem = NavItem { label: "Gallery", path: "/gallery" };
const SETTINGS: NavItem = NavItem { label: "Settings", path: "/settings" };

const COUPLE_NAV: [NavItem; 4] = [DASHBOARD, TIMELINE, WISHLIST, SETTINGS];
const PERSONAL_NAV: [NavItem; 3] = [DASHBOARD, GALLERY, SETTINGS];

/// Navigation entries offered in `mode`.
pub fn nav_items(mode: SpaceMode) -> &'static [NavItem] {
    match mode {
        SpaceMode::Couple => &COUPLE_NAV,
        SpaceMode::Personal => &PERSONAL_NAV,
    }
}

/// Header greeting for the signed-in user.
pub fn greeting(state: &SessionState) -> String {
    match state.user() {
        Some(user) => format!("Hi, {}", user.name),
        None => "Hi".to_owned(),
    }
}

/// Title + header + page content.
#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let (session, space) = match (use_session(), use_space_mode()) {
        (Ok(session), Ok(space)) => (session, space),
        (Err(e), _) | (_, Err(e)) => return configuration_notice(e),
    };
    let mode = move || space.with(SpaceModeStore::mode);
    let page_title = format!("{title} | Memoir");

    let on_sign_out = move |_| {
        let logout = sign_out(&BROWSER_IDENTITY, &session);
        leptos::task::spawn_local(logout);
    };

    view! {
        <Title text=page_title/>
        <div class="layout" data-space=move || mode().as_str()>
            <header class="layout__header">
                <a class="layout__brand" href="/">"Memoir"</a>
                <nav class="layout__nav">
                    {move || {
                        nav_items(mode())
                            .iter()
                            .map(|item| view! { <a class="layout__nav-link" href=item.path>{item.label}</a> })
                            .collect_view()
                    }}
                </nav>
                <SpaceToggle/>
                <span class="layout__greeting">{move || session.with(greeting)}</span>
                <button class="layout__sign-out" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <main class="layout__main">
                <h1 class="layout__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
    .into_any()
}
