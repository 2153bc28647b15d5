//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and page layout (main entry point)
//! - [`sidebar`] - Responsive navigation sidebar
//! - [`home`] - Landing page
//! - [`page`] - Content and not-found pages
//! - [`logo`] - Brand logo
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod home;
pub mod icons;
pub mod logo;
pub mod page;
pub mod router;
pub mod sidebar;

pub use router::AppRouter;
