//! Small status views shared by guarded pages.

use leptos::prelude::*;

use crate::error::ConfigurationError;

/// Shown while the identity check is pending.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}

/// Rendered in place of content whose provider is missing.
pub fn configuration_notice(err: ConfigurationError) -> AnyView {
    leptos::logging::error!("{err}");
    view! { <p class="config-error">{err.to_string()}</p> }.into_any()
}
