//! Authentication-gated route wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages wrap their content in `ProtectedRoute` (fixed sign-in
//! destination) or `AuthVerify` (configurable destination). Both render from
//! `guard_view` and redirect from a `RouteGuard` carried across effect runs,
//! so a redirect fires once per transition rather than once per render.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::{LoadingIndicator, configuration_notice};
use crate::config::GuardOptions;
use crate::util::context::{session_status, use_session};
use crate::util::guard::{GuardView, RouteGuard, guard_view};

/// Render `children` only for an authenticated session; otherwise redirect
/// to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardOptions::default(), children)
}

/// Like `ProtectedRoute`, with the unauthenticated destination supplied by
/// the caller.
#[component]
pub fn AuthVerify(
    /// Destination path when unauthenticated. Defaults to `/login`.
    #[prop(into, optional)]
    redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    guarded(GuardOptions::from_destination(redirect_to), children)
}

fn guarded(options: GuardOptions, children: ChildrenFn) -> AnyView {
    let session = match use_session() {
        Ok(session) => session,
        Err(e) => return configuration_notice(e),
    };

    let navigate = use_navigate();
    let navigator = move |path: &str| {
        navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };
    let status = session_status(session);
    Effect::new(move |guard: Option<RouteGuard>| {
        let mut guard = guard.unwrap_or_else(|| RouteGuard::new(options.clone()));
        guard.transition(status.get(), &navigator);
        guard
    });

    view! {
        {move || match guard_view(status.get()) {
            GuardView::Loading => view! { <LoadingIndicator/> }.into_any(),
            GuardView::Empty => ().into_any(),
            GuardView::Children => children().into_any(),
        }}
    }
    .into_any()
}
