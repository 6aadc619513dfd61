//! Client configuration: route paths, storage keys, guard options.
//!
//! Values are compile-time constants. The API base can be overridden at
//! build time with `MEMOIR_API_BASE` for deployments where the identity
//! backend is not same-origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Sign-in destination used by `ProtectedRoute`.
pub const SIGN_IN_PATH: &str = "/login";

/// Landing route after a successful sign-in.
pub const HOME_PATH: &str = "/";

/// Local storage key for the persisted space mode.
pub const SPACE_MODE_KEY: &str = "memoir_space_mode";

/// Local storage key for the cached identity token.
pub const AUTH_TOKEN_KEY: &str = "memoir_auth_token";

/// Prefix for identity backend requests.
pub fn api_base() -> &'static str {
    option_env!("MEMOIR_API_BASE").unwrap_or("")
}

/// Join the API base and an endpoint path.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

/// Options recognized by `AuthVerify`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOptions {
    /// Destination path when the session is unauthenticated.
    pub redirect_to: String,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self { redirect_to: SIGN_IN_PATH.to_owned() }
    }
}

impl GuardOptions {
    pub fn redirect_to(path: impl Into<String>) -> Self {
        Self { redirect_to: path.into() }
    }

    /// Options for an optional caller-supplied destination. A missing or
    /// blank destination falls back to the sign-in page.
    pub fn from_destination(destination: Option<String>) -> Self {
        match destination {
            Some(path) if !path.trim().is_empty() => Self::redirect_to(path),
            _ => Self::default(),
        }
    }
}
