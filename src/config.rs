//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Brand, landing page copy and sidebar routes.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// Sidebar Configuration
// =============================================================================

/// Media query matching viewports that get the overlay sidebar.
///
/// Must agree with the `@media` blocks in the sidebar and layout stylesheets.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 767px)";

/// Duration of the sidebar slide animation, in seconds.
pub const SIDEBAR_TRANSITION_SECS: f64 = 0.5;

/// Delay before the sidebar element is revealed after mount (milliseconds).
///
/// Keeps the overlay from flashing on narrow screens before the first
/// viewport evaluation has positioned it.
pub const SIDEBAR_REVEAL_DELAY_MS: u64 = 100;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Maximum level forwarded to the browser console.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes (`lucide-icons` feature)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

impl IconTheme {
    /// Theme picked by the enabled cargo features.
    pub const fn selected() -> Self {
        if cfg!(feature = "lucide-icons") {
            Self::Lucide
        } else {
            Self::Bootstrap
        }
    }
}

/// Current icon theme used throughout the application.
/// Build with `--features lucide-icons` to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::selected();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_theme_follows_feature() {
        assert_eq!(ICON_THEME == IconTheme::Lucide, cfg!(feature = "lucide-icons"));
        assert_eq!(ICON_THEME == IconTheme::default(), !cfg!(feature = "lucide-icons"));
    }

    #[test]
    fn test_log_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(LOG_LEVEL, expected);
    }
}
