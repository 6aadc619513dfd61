//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session and the space mode are independent stores composed side by
//! side at the application root.

pub mod session;
pub mod space_mode;
