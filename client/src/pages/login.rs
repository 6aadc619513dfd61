//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::configuration_notice;
use crate::config::HOME_PATH;
use crate::error::AuthError;
use crate::net::identity::BROWSER_IDENTITY;
use crate::net::types::Credentials;
use crate::state::session::{SessionState, sign_in};
use crate::util::context::use_session;

/// User-facing text for a failed sign-in.
fn sign_in_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidCredentials => "Email or password is incorrect.".to_owned(),
        AuthError::NetworkFailure(_) => "Could not reach the server. Try again.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = match use_session() {
        Ok(session) => session,
        Err(e) => return configuration_notice(e),
    };
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed in (now or already): leave the login page.
    let navigate = use_navigate();
    Effect::new(move || {
        if session.with(SessionState::is_authenticated) {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match Credentials::from_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            match sign_in(&BROWSER_IDENTITY, &session, &credentials).await {
                Ok(user) => info.set(format!("Welcome back, {}.", user.name)),
                Err(e) => {
                    password.set(String::new());
                    info.set(sign_in_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Memoir"</h1>
                <p class="login-card__subtitle">"Sign in to your space"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
    .into_any()
}
