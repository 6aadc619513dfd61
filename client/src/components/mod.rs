//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state through the checked accessors in
//! `util::context` and never own session or space-mode state themselves.

pub mod layout;
pub mod notice;
pub mod protected_route;
pub mod space_toggle;
