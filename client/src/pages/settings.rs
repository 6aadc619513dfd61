//! Account settings: who is signed in and which space is active.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::notice::configuration_notice;
use crate::components::protected_route::AuthVerify;
use crate::config::SIGN_IN_PATH;
use crate::state::space_mode::SpaceModeStore;
use crate::util::context::{use_session, use_space_mode};

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AuthVerify redirect_to=SIGN_IN_PATH>
            <Layout title="Settings">
                <SettingsPanel/>
            </Layout>
        </AuthVerify>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let (session, space) = match (use_session(), use_space_mode()) {
        (Ok(session), Ok(space)) => (session, space),
        (Err(e), _) | (_, Err(e)) => return configuration_notice(e),
    };
    let mode_error = RwSignal::new(None::<String>);

    let account_name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let account_email = move || {
        session.with(|s| s.user().and_then(|u| u.email.clone()).unwrap_or_else(|| "not set".to_owned()))
    };

    let on_mode_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match space.try_update(|s| s.set_from_str(&raw)) {
            Some(Err(e)) => mode_error.set(Some(e.to_string())),
            Some(Ok(_)) | None => mode_error.set(None),
        }
    };

    view! {
        <section class="settings">
            <h2>"Account"</h2>
            <dl class="settings__account">
                <dt>"Name"</dt>
                <dd>{account_name}</dd>
                <dt>"Email"</dt>
                <dd>{account_email}</dd>
            </dl>
            <h2>"Space"</h2>
            <label class="settings__field">
                "Active space"
                <select
                    prop:value=move || space.with(SpaceModeStore::mode).as_str()
                    on:change=on_mode_change
                >
                    <option value="couple">"Couple"</option>
                    <option value="personal">"Personal"</option>
                </select>
            </label>
            <Show when=move || mode_error.get().is_some()>
                <p class="settings__error">{move || mode_error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
    .into_any()
}
