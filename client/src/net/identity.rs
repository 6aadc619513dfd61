//! Identity backend boundary and its HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every network call fails with
//! `NetworkFailure`, which the session resolves fail-closed.
//!
//! ERROR HANDLING
//! ==============
//! A 401/403 from the login endpoint means the credentials were wrong. A
//! 401/403 from the session endpoint means there is no session, which is not
//! an error. Everything else is a network failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::future::Future;

use super::types::{Credentials, Identity};
#[cfg(feature = "hydrate")]
use super::types::User;
use crate::config::AUTH_TOKEN_KEY;
use crate::error::AuthError;
use crate::util::storage::{BrowserStorage, KeyValueStore};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// The external service that decides who the user is.
pub trait IdentityBackend {
    /// Resolve the current session. `Ok(None)` means nobody is signed in.
    fn check_session(&self) -> impl Future<Output = Result<Option<Identity>, AuthError>>;

    /// Exchange credentials for an identity.
    fn sign_in(&self, credentials: &Credentials) -> impl Future<Output = Result<Identity, AuthError>>;

    /// End the session. Cached credentials are dropped before the returned
    /// future is first polled.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_rejection(status: u16) -> bool {
    status == 401 || status == 403
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failure(status: u16) -> AuthError {
    if is_rejection(status) {
        AuthError::InvalidCredentials
    } else {
        AuthError::NetworkFailure(format!("sign in failed: {status}"))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn session_failure(status: u16) -> AuthError {
    AuthError::NetworkFailure(format!("session check failed: {status}"))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::NetworkFailure("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> AuthError {
    AuthError::NetworkFailure(err.to_string())
}

/// Identity backend reached over HTTP, caching its bearer token in `S`.
#[derive(Clone, Debug, Default)]
pub struct HttpIdentity<S = BrowserStorage> {
    storage: S,
}

/// The identity backend the browser app talks to.
pub static BROWSER_IDENTITY: HttpIdentity = HttpIdentity::browser();

impl HttpIdentity<BrowserStorage> {
    pub const fn browser() -> Self {
        Self { storage: BrowserStorage }
    }
}

impl<S: KeyValueStore> HttpIdentity<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The cached bearer token, if storage is reachable and holds one.
    pub fn cached_token(&self) -> Option<String> {
        match self.storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(_) => None,
        }
    }

    fn remember_token(&self, token: &str) {
        if let Err(e) = self.storage.set(AUTH_TOKEN_KEY, token) {
            leptos::logging::warn!("identity token not cached: {e}");
        }
    }

    fn forget_token(&self) {
        if let Err(e) = self.storage.remove(AUTH_TOKEN_KEY) {
            leptos::logging::warn!("identity token not cleared: {e}");
        }
    }
}

impl<S: KeyValueStore> IdentityBackend for HttpIdentity<S> {
    async fn check_session(&self) -> Result<Option<Identity>, AuthError> {
        let Some(token) = self.cached_token() else {
            return Ok(None);
        };
        match fetch_session_user(&token).await? {
            Some(user) => Ok(Some(Identity { user, token: Some(token) })),
            None => {
                self.forget_token();
                Ok(None)
            }
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let identity = post_login(credentials).await?;
        if let Some(token) = identity.token.as_deref() {
            self.remember_token(token);
        }
        Ok(identity)
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> {
        let token = self.cached_token();
        self.forget_token();
        async move {
            match token {
                Some(token) => post_logout(&token).await,
                None => Ok(()),
            }
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_session_user(token: &str) -> Result<Option<User>, AuthError> {
    let url = crate::config::api_url(SESSION_ENDPOINT);
    let resp = gloo_net::http::Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(network)?;
    if is_rejection(resp.status()) {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(session_failure(resp.status()));
    }
    resp.json::<User>().await.map(Some).map_err(network)
}

#[cfg(not(feature = "hydrate"))]
async fn fetch_session_user(token: &str) -> Result<Option<super::types::User>, AuthError> {
    let _ = token;
    Err(unavailable())
}

#[cfg(feature = "hydrate")]
async fn post_login(credentials: &Credentials) -> Result<Identity, AuthError> {
    let url = crate::config::api_url(LOGIN_ENDPOINT);
    let resp = gloo_net::http::Request::post(&url)
        .json(credentials)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(login_failure(resp.status()));
    }
    resp.json::<Identity>().await.map_err(network)
}

#[cfg(not(feature = "hydrate"))]
async fn post_login(credentials: &Credentials) -> Result<Identity, AuthError> {
    let _ = credentials;
    Err(unavailable())
}

#[cfg(feature = "hydrate")]
async fn post_logout(token: &str) -> Result<(), AuthError> {
    let url = crate::config::api_url(LOGOUT_ENDPOINT);
    let resp = gloo_net::http::Request::post(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() && !is_rejection(resp.status()) {
        return Err(AuthError::NetworkFailure(format!("sign out failed: {}", resp.status())));
    }
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
async fn post_logout(token: &str) -> Result<(), AuthError> {
    let _ = token;
    Err(unavailable())
}
