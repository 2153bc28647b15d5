//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Blog, LuExternalLink as ExternalLink, LuFileText as Page,
        LuFolder as Projects, LuHouse as Home, LuMenu as Menu, LuUser as About, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsFileEarmarkText as Page, BsFolderFill as Projects,
        BsHouseFill as Home, BsJournalText as Blog, BsList as Menu, BsPerson as About,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(HOME, Home);
themed_icon!(PROJECTS, Projects);
themed_icon!(BLOG, Blog);
themed_icon!(ABOUT, About);
themed_icon!(PAGE, Page);

/// Icon for a sidebar route's configured icon name.
///
/// Unknown or missing names fall back to a generic page icon.
pub fn route_icon(name: Option<&str>) -> Icon {
    match name {
        Some("home") => HOME,
        Some("projects") => PROJECTS,
        Some("blog") => BLOG,
        Some("about") => ABOUT,
        _ => PAGE,
    }
}
