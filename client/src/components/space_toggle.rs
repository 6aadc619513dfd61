//! Couple/personal switch shown in the page header.

use leptos::prelude::*;

use crate::components::notice::configuration_notice;
use crate::state::space_mode::{SpaceMode, SpaceModeStore};
use crate::util::context::use_space_mode;

#[component]
pub fn SpaceToggle() -> impl IntoView {
    let space = match use_space_mode() {
        Ok(space) => space,
        Err(e) => return configuration_notice(e),
    };
    let mode = move || space.with(SpaceModeStore::mode);

    view! {
        <button
            class="space-toggle"
            type="button"
            title=move || format!("Switch to {}", mode().toggled().label())
            aria-pressed=move || (mode() == SpaceMode::Personal).to_string()
            on:click=move |_| {
                space.update(|s| {
                    s.toggle();
                });
            }
        >
            {move || mode().label()}
        </button>
    }
    .into_any()
}
