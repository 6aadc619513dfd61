//! Identity backend access.

pub mod identity;
pub mod types;
