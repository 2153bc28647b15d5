//! Data models and types for the application.
//!
//! - [`AppRoute`] - Hash-based navigation

mod route;

pub use route::{AppRoute, href_for};
