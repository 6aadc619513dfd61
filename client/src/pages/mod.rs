//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each guarded page is `ProtectedRoute` (or `AuthVerify` with an explicit
//! destination) around `Layout` around one feature panel. Only `login` is
//! reachable without a session.

pub mod dashboard;
pub mod features;
pub mod login;
pub mod settings;
