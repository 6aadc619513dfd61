//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::layout::{Layout, nav_items};
use crate::components::notice::configuration_notice;
use crate::components::protected_route::ProtectedRoute;
use crate::state::space_mode::{SpaceMode, SpaceModeStore};
use crate::util::context::use_space_mode;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout title="Home">
                <DashboardPanel/>
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardPanel() -> impl IntoView {
    let space = match use_space_mode() {
        Ok(space) => space,
        Err(e) => return configuration_notice(e),
    };
    let mode = move || space.with(SpaceModeStore::mode);

    view! {
        <section class="dashboard">
            <p class="dashboard__intro">
                {move || match mode() {
                    SpaceMode::Couple => "Everything the two of you are keeping together.",
                    SpaceMode::Personal => "Your own corner of the memoir.",
                }}
            </p>
            <ul class="dashboard__cards">
                {move || {
                    nav_items(mode())
                        .iter()
                        .skip(1)
                        .map(|item| {
                            view! {
                                <li class="dashboard__card">
                                    <a href=item.path>{item.label}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
    .into_any()
}
