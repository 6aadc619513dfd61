use std::cell::{Cell, RefCell};

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

fn ada() -> Identity {
    Identity {
        user: User {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            email: Some("ada@example.com".to_owned()),
            avatar_url: None,
        },
        token: Some("tok".to_owned()),
    }
}

fn creds() -> Credentials {
    Credentials { email: "ada@example.com".to_owned(), password: "pw".to_owned() }
}

/// Session cell that can be torn down mid-test.
#[derive(Default)]
struct LocalCell {
    state: RefCell<SessionState>,
    torn_down: Cell<bool>,
    applied: Cell<usize>,
}

impl LocalCell {
    fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    fn tear_down(&self) {
        self.torn_down.set(true);
    }
}

impl SessionCell for LocalCell {
    fn modify<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        if self.torn_down.get() {
            return None;
        }
        self.applied.set(self.applied.get() + 1);
        Some(f(&mut self.state.borrow_mut()))
    }
}

/// Backend with canned answers.
struct FakeIdentity {
    check: Result<Option<Identity>, AuthError>,
    sign_in: Result<Identity, AuthError>,
    sign_out: Result<(), AuthError>,
    sign_out_calls: Cell<usize>,
}

impl FakeIdentity {
    fn answering(check: Result<Option<Identity>, AuthError>) -> Self {
        Self {
            check,
            sign_in: Err(AuthError::InvalidCredentials),
            sign_out: Ok(()),
            sign_out_calls: Cell::new(0),
        }
    }

    fn signing_in(sign_in: Result<Identity, AuthError>) -> Self {
        Self { sign_in, ..Self::answering(Ok(None)) }
    }
}

impl IdentityBackend for FakeIdentity {
    fn check_session(&self) -> impl Future<Output = Result<Option<Identity>, AuthError>> {
        std::future::ready(self.check.clone())
    }

    fn sign_in(&self, _credentials: &Credentials) -> impl Future<Output = Result<Identity, AuthError>> {
        std::future::ready(self.sign_in.clone())
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        std::future::ready(self.sign_out.clone())
    }
}

/// Backend whose session check resolves only when the test sends an answer.
struct ChannelIdentity {
    rx: RefCell<Option<oneshot::Receiver<Result<Option<Identity>, AuthError>>>>,
}

impl IdentityBackend for ChannelIdentity {
    fn check_session(&self) -> impl Future<Output = Result<Option<Identity>, AuthError>> {
        let rx = self.rx.borrow_mut().take();
        async move {
            match rx {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(AuthError::NetworkFailure("canceled".to_owned()))),
                None => Err(AuthError::NetworkFailure("already checked".to_owned())),
            }
        }
    }

    fn sign_in(&self, _credentials: &Credentials) -> impl Future<Output = Result<Identity, AuthError>> {
        std::future::ready(Err(AuthError::InvalidCredentials))
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> {
        std::future::ready(Ok(()))
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_pending() {
    let state = SessionState::default();
    assert_eq!(state.status(), SessionStatus::Pending);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn derived_flags_follow_status() {
    let mut state = SessionState::default();
    let ticket = state.begin_check();
    state.resolve(ticket, Ok(Some(ada())));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());

    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
}

#[test]
fn resolve_with_identity_authenticates() {
    let mut state = SessionState::default();
    let ticket = state.begin_check();
    assert!(state.resolve(ticket, Ok(Some(ada()))));
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Ada"));
}

#[test]
fn resolve_without_identity_is_unauthenticated() {
    let mut state = SessionState::default();
    let ticket = state.begin_check();
    assert!(state.resolve(ticket, Ok(None)));
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
}

#[test]
fn resolve_failure_fails_closed() {
    let mut state = SessionState::default();
    let ticket = state.begin_check();
    assert!(state.resolve(ticket, Err(AuthError::NetworkFailure("offline".to_owned()))));
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert!(state.user().is_none());
}

#[test]
fn recheck_returns_to_pending_and_clears_nothing_until_resolved() {
    let mut state = SessionState::default();
    let first = state.begin_check();
    state.resolve(first, Ok(Some(ada())));
    state.begin_check();
    assert_eq!(state.status(), SessionStatus::Pending);
}

#[test]
fn stale_ticket_is_dropped_after_sign_out() {
    let mut state = SessionState::default();
    let ticket = state.begin_check();
    state.sign_out();
    assert!(!state.resolve(ticket, Ok(Some(ada()))));
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert!(state.user().is_none());
}

#[test]
fn older_check_cannot_override_newer_check() {
    let mut state = SessionState::default();
    let older = state.begin_check();
    let newer = state.begin_check();
    assert!(state.resolve(newer, Ok(None)));
    assert!(!state.resolve(older, Ok(Some(ada()))));
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
}

#[test]
fn sign_out_from_any_status_is_unauthenticated() {
    let mut pending = SessionState::default();
    pending.sign_out();
    assert_eq!(pending.status(), SessionStatus::Unauthenticated);

    let mut authed = SessionState::default();
    let ticket = authed.begin_check();
    authed.resolve(ticket, Ok(Some(ada())));
    authed.sign_out();
    assert_eq!(authed.status(), SessionStatus::Unauthenticated);
    assert!(authed.user().is_none());
}

// =============================================================
// check_session
// =============================================================

#[test]
fn check_session_authenticates_on_identity() {
    let cell = LocalCell::default();
    block_on(check_session(&FakeIdentity::answering(Ok(Some(ada()))), &cell));
    assert_eq!(cell.status(), SessionStatus::Authenticated);
}

#[test]
fn check_session_without_session_is_unauthenticated() {
    let cell = LocalCell::default();
    block_on(check_session(&FakeIdentity::answering(Ok(None)), &cell));
    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
}

#[test]
fn check_session_network_failure_is_unauthenticated() {
    let cell = LocalCell::default();
    let backend = FakeIdentity::answering(Err(AuthError::NetworkFailure("offline".to_owned())));
    block_on(check_session(&backend, &cell));
    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
}

#[test]
fn check_session_on_torn_down_cell_does_nothing() {
    let cell = LocalCell::default();
    cell.tear_down();
    block_on(check_session(&FakeIdentity::answering(Ok(Some(ada()))), &cell));
    assert_eq!(cell.applied.get(), 0);
    assert_eq!(cell.status(), SessionStatus::Pending);
}

#[test]
fn check_session_resolving_after_teardown_is_dropped() {
    let (tx, rx) = oneshot::channel();
    let backend = ChannelIdentity { rx: RefCell::new(Some(rx)) };
    let cell = LocalCell::default();

    block_on(async {
        let check = check_session(&backend, &cell);
        let teardown = async {
            cell.tear_down();
            assert!(tx.send(Ok(Some(ada()))).is_ok());
        };
        futures::join!(check, teardown);
    });

    // Only `begin_check` got through; the resolution found the cell gone.
    assert_eq!(cell.applied.get(), 1);
    assert_eq!(cell.status(), SessionStatus::Pending);
}

#[test]
fn check_session_racing_sign_out_stays_unauthenticated() {
    let (tx, rx) = oneshot::channel();
    let backend = ChannelIdentity { rx: RefCell::new(Some(rx)) };
    let cell = LocalCell::default();

    block_on(async {
        let check = check_session(&backend, &cell);
        let user_signs_out = async {
            cell.modify(SessionState::sign_out);
            assert!(tx.send(Ok(Some(ada()))).is_ok());
        };
        futures::join!(check, user_signs_out);
    });

    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_success_authenticates_and_returns_user() {
    let cell = LocalCell::default();
    let backend = FakeIdentity::signing_in(Ok(ada()));
    let user = block_on(sign_in(&backend, &cell, &creds())).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(cell.status(), SessionStatus::Authenticated);
}

#[test]
fn sign_in_invalid_credentials_surfaces_error() {
    let cell = LocalCell::default();
    let backend = FakeIdentity::signing_in(Err(AuthError::InvalidCredentials));
    let err = block_on(sign_in(&backend, &cell, &creds())).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
}

#[test]
fn sign_in_network_failure_surfaces_error() {
    let cell = LocalCell::default();
    let backend = FakeIdentity::signing_in(Err(AuthError::NetworkFailure("offline".to_owned())));
    let err = block_on(sign_in(&backend, &cell, &creds())).unwrap_err();
    assert!(matches!(err, AuthError::NetworkFailure(_)));
    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
}

#[test]
fn sign_in_after_teardown_still_reports_result() {
    let cell = LocalCell::default();
    cell.tear_down();
    let backend = FakeIdentity::signing_in(Ok(ada()));
    assert!(block_on(sign_in(&backend, &cell, &creds())).is_ok());
    assert_eq!(cell.applied.get(), 0);
}

#[test]
fn sign_out_transitions_before_backend_completes() {
    let cell = LocalCell::default();
    block_on(check_session(&FakeIdentity::answering(Ok(Some(ada()))), &cell));
    let backend = FakeIdentity::answering(Ok(None));

    let pending = sign_out(&backend, &cell);
    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
    assert_eq!(backend.sign_out_calls.get(), 1);
    block_on(pending);
}

#[test]
fn sign_out_backend_failure_is_absorbed() {
    let cell = LocalCell::default();
    let backend = FakeIdentity {
        sign_out: Err(AuthError::NetworkFailure("offline".to_owned())),
        ..FakeIdentity::answering(Ok(None))
    };
    block_on(sign_out(&backend, &cell));
    assert_eq!(cell.status(), SessionStatus::Unauthenticated);
}

// =============================================================
// RwSignal as a session cell
// =============================================================

#[test]
fn signal_cell_applies_while_alive_and_stops_after_dispose() {
    let owner = Owner::new();
    owner.with(|| {
        let signal = RwSignal::new(SessionState::default());
        assert_eq!(signal.modify(SessionState::begin_check), Some(CheckTicket(1)));
        assert!(signal.with_untracked(SessionState::is_loading));

        signal.dispose();
        assert!(signal.modify(SessionState::sign_out).is_none());
    });
}

