//! Utility modules for DOM access.
//!
//! Provides:
//! - [`dom`] - Window, media query and event path helpers

pub mod dom;
