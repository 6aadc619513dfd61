//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read `SessionState`; the async
//! operations here are the only writers. The state itself never navigates.
//!
//! DESIGN
//! ======
//! Every check carries a `CheckTicket` holding the epoch it started under.
//! `begin_check` and `sign_out` both bump the epoch, so a check that resolves
//! after a newer check or a sign-out is dropped instead of overwriting the
//! newer state. Writes go through `SessionCell`, whose `RwSignal` impl
//! returns `None` once the owning scope is disposed; a check that outlives
//! its provider therefore resolves into nothing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::error::AuthError;
use crate::net::identity::IdentityBackend;
use crate::net::types::{Credentials, Identity, User};

/// Where the identity check currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Identity check in flight; nothing may be decided yet.
    #[default]
    Pending,
    Authenticated,
    Unauthenticated,
}

/// Proof that a check was started under a particular epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckTicket(u64);

/// Authentication state: status plus the user once authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    status: SessionStatus,
    user: Option<User>,
    epoch: u64,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// The signed-in user. `Some` only while authenticated.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Enter `Pending` and hand out a ticket for the resolution.
    pub fn begin_check(&mut self) -> CheckTicket {
        self.epoch += 1;
        self.status = SessionStatus::Pending;
        CheckTicket(self.epoch)
    }

    /// Apply a check outcome. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    ///
    /// `Ok(None)` and every `Err` resolve to `Unauthenticated`.
    pub fn resolve(&mut self, ticket: CheckTicket, outcome: Result<Option<Identity>, AuthError>) -> bool {
        if ticket.0 != self.epoch {
            return false;
        }
        match outcome {
            Ok(Some(identity)) => {
                self.status = SessionStatus::Authenticated;
                self.user = Some(identity.user);
            }
            Ok(None) | Err(_) => {
                self.status = SessionStatus::Unauthenticated;
                self.user = None;
            }
        }
        true
    }

    /// Unconditionally drop the session and invalidate in-flight checks.
    pub fn sign_out(&mut self) {
        self.epoch += 1;
        self.status = SessionStatus::Unauthenticated;
        self.user = None;
    }
}

/// Shared, possibly torn-down home of a `SessionState`.
pub trait SessionCell {
    /// Run `f` against the state. `None` means the owner is gone and nothing
    /// was applied.
    fn modify<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<SessionState> {
    fn modify<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run an identity check and resolve the session from it.
pub async fn check_session<B, C>(backend: &B, session: &C)
where
    B: IdentityBackend,
    C: SessionCell,
{
    let Some(ticket) = session.modify(SessionState::begin_check) else {
        return;
    };
    let outcome = backend.check_session().await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("session check failed: {e}");
    }
    if session.modify(|s| s.resolve(ticket, outcome)).is_none() {
        leptos::logging::log!("session check resolved after teardown; dropped");
    }
}

/// Sign in and resolve the session. The error, if any, is returned to the
/// caller after the session has been marked unauthenticated.
///
/// # Errors
///
/// Returns the backend's [`AuthError`] unchanged.
pub async fn sign_in<B, C>(backend: &B, session: &C, credentials: &Credentials) -> Result<User, AuthError>
where
    B: IdentityBackend,
    C: SessionCell,
{
    let ticket = session.modify(SessionState::begin_check);
    let result = backend.sign_in(credentials).await;
    if let Some(ticket) = ticket {
        let outcome = result.clone().map(Some);
        session.modify(|s| s.resolve(ticket, outcome));
    }
    result.map(|identity| identity.user)
}

/// Drop the session now; tell the backend afterwards.
///
/// The state transition and token removal happen before this returns. The
/// returned future only carries the backend logout call, whose failure is
/// logged and otherwise ignored. It borrows the backend but not the session,
/// so it can be spawned after the caller's borrow ends.
pub fn sign_out<'b, B, C>(backend: &'b B, session: &C) -> impl Future<Output = ()> + use<'b, B, C>
where
    B: IdentityBackend,
    C: SessionCell,
{
    session.modify(SessionState::sign_out);
    let logout = backend.sign_out();
    async move {
        if let Err(e) = logout.await {
            leptos::logging::warn!("sign out not confirmed by backend: {e}");
        }
    }
}
