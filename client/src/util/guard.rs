//! Route guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route shares this redirect behavior. Rendering and
//! redirecting are split: `guard_view` is a pure function of the status,
//! while `RouteGuard::transition` is the only place a redirect is issued and
//! only fires when the status *enters* `Unauthenticated`. Re-renders while the
//! status stays put never navigate again.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::GuardOptions;
use crate::state::session::SessionStatus;

/// What a guarded route shows for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Empty,
    Children,
}

pub fn guard_view(status: SessionStatus) -> GuardView {
    match status {
        SessionStatus::Pending => GuardView::Loading,
        SessionStatus::Unauthenticated => GuardView::Empty,
        SessionStatus::Authenticated => GuardView::Children,
    }
}

/// Fire-and-forget navigation.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Transition handler for one guarded route.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    options: GuardOptions,
    last: Option<SessionStatus>,
}

impl RouteGuard {
    pub fn new(options: GuardOptions) -> Self {
        Self { options, last: None }
    }

    pub fn redirect_to(&self) -> &str {
        &self.options.redirect_to
    }

    /// Feed the latest status. Navigates once per entry into
    /// `Unauthenticated` and returns whether it did.
    pub fn transition<N: Navigator + ?Sized>(&mut self, status: SessionStatus, navigator: &N) -> bool {
        let entered = status == SessionStatus::Unauthenticated && self.last != Some(status);
        self.last = Some(status);
        if entered {
            navigator.navigate_to(&self.options.redirect_to);
        }
        entered
    }
}
