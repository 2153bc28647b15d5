//! Framework-independent logic for the site.
//!
//! This module provides:
//! - [`ViewportReading`] two-stage breakpoint classification
//! - [`VisibilityController`] sidebar animation policy
//! - [`DismissalWatcher`] outside-press dismissal
//! - [`SiteConfig`] bundled site content

pub mod dismissal;
pub mod error;
pub mod site;
pub mod viewport;
pub mod visibility;

pub use dismissal::{Dismissal, DismissalWatcher, IgnoreReason, OpenState};
pub use site::{SidebarRoute, SiteConfig, SiteLink};
pub use viewport::{ViewportClass, ViewportReading};
pub use visibility::{
    AnimationCommand, AnimationControls, AnimationMode, AnimationTarget, FirstLoadMarker,
    VisibilityController,
};
