//! DTOs exchanged with the identity backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as reported by the identity backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A resolved identity: the user plus the bearer token that proves it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

/// Sign-in form input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validate raw form input. The email is trimmed; the password is kept
    /// exactly as typed, since surrounding spaces are part of the secret.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when either field is blank or the email
    /// has no `@`.
    pub fn from_input(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err("Enter both email and password.");
        }
        if !email.contains('@') {
            return Err("Enter a valid email address.");
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}
