//! Error types for the application.
//!
//! The sidebar and viewport logic degrade instead of failing, so the only
//! fallible path is loading the bundled site content.

use thiserror::Error;

/// Site content configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// `site.toml` is not valid TOML or does not match the schema.
    #[error("invalid site config: {0}")]
    Parse(String),
    /// No sidebar routes were configured.
    #[error("site config defines no routes")]
    NoRoutes,
    /// Route paths must be absolute (start with `/`).
    #[error("route path '{0}' must start with '/'")]
    InvalidRoutePath(String),
    /// Two routes share the same path.
    #[error("route path '{0}' is defined more than once")]
    DuplicateRoute(String),
    /// No route points at `/`.
    #[error("site config has no home route ('/')")]
    MissingHome,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
