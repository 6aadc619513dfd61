//! Providers and checked accessors for shared client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls the `provide_*` functions once; pages and components call the
//! `use_*` accessors. An accessor called outside a provider returns
//! `ConfigurationError` instead of silently falling back to a default.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::error::ConfigurationError;
use crate::state::session::{SessionState, SessionStatus};
use crate::state::space_mode::SpaceModeStore;
use crate::util::storage::BrowserStorage;

pub type SessionSignal = RwSignal<SessionState>;
pub type SpaceModeSignal = RwSignal<SpaceModeStore<BrowserStorage>>;

/// Create the session in `Pending` and provide it to descendants.
pub fn provide_session() -> SessionSignal {
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    session
}

/// Load the space mode from local storage and provide it to descendants.
///
/// During server rendering storage is unavailable and the mode is `Couple`.
pub fn provide_space_mode() -> SpaceModeSignal {
    let space = RwSignal::new(SpaceModeStore::load(BrowserStorage));
    provide_context(space);
    space
}

/// # Errors
///
/// Returns [`ConfigurationError::MissingProvider`] outside `provide_session`.
pub fn use_session() -> Result<SessionSignal, ConfigurationError> {
    use_context::<SessionSignal>().ok_or(ConfigurationError::MissingProvider("SessionState"))
}

/// # Errors
///
/// Returns [`ConfigurationError::MissingProvider`] outside `provide_space_mode`.
pub fn use_space_mode() -> Result<SpaceModeSignal, ConfigurationError> {
    use_context::<SpaceModeSignal>().ok_or(ConfigurationError::MissingProvider("SpaceModeStore"))
}

/// The session status alone, so readers re-run on status changes only and
/// not on user or epoch updates.
pub fn session_status(session: SessionSignal) -> Memo<SessionStatus> {
    Memo::new(move |_| session.with(SessionState::status))
}
