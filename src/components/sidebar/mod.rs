//! Responsive navigation sidebar.
//!
//! - [`Sidebar`] - The sidebar itself (visibility, dismissal, reveal timer)
//! - [`OpenSidebarButton`] - Menu button for the page header
//! - [`hooks`] - Viewport tracking and style-based animation controls

mod buttons;
pub mod hooks;
mod route_link;
mod sidebar;

pub use buttons::{CloseSidebarButton, OpenSidebarButton};
pub use sidebar::Sidebar;
