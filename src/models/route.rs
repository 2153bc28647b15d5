//! Hash-based routing.
//!
//! URL format: `#/path` (e.g. `#/`, `#/blog`). Hash routing keeps the site
//! servable from any static host without rewrite rules.

use crate::utils::dom;

/// The page currently addressed by the URL hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppRoute {
    /// Absolute path without the hash, always starting with `/`.
    path: String,
}

impl AppRoute {
    /// The landing page.
    pub fn home() -> Self {
        Self {
            path: "/".to_string(),
        }
    }

    /// Parse a URL hash (with or without the leading `#`).
    ///
    /// Trailing slashes are ignored so `#/blog/` and `#/blog` are the same
    /// route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');

        if path.is_empty() {
            return Self::home();
        }

        Self {
            path: format!("/{}", path),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_home(&self) -> bool {
        self.path == "/"
    }

    /// Convert to a URL hash suitable for `href`.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::home()
    }
}

/// Anchor `href` for a site path such as `/blog`.
pub fn href_for(path: &str) -> String {
    AppRoute::from_hash(path).to_hash()
}
