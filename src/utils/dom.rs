//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Evaluate a media query against the current window.
///
/// Returns `None` when there is no window or `matchMedia` is unavailable.
pub fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
}

/// Whether `event` passed through `target` on its way to the document.
pub fn event_path_contains(event: &web_sys::Event, target: &web_sys::Element) -> bool {
    event.composed_path().includes(target, 0)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}
