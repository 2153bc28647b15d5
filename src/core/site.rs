//! Site content loaded from `assets/site.toml`.
//!
//! Brand, landing page copy and the ordered sidebar route list. The file is
//! bundled at compile time and validated once at startup.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::SITE_TOML;
use crate::core::error::ConfigError;

/// Two-line brand shown by the logo.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub first: String,
    pub last: String,
}

impl Brand {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// A button on the landing page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteLink {
    pub label: String,
    pub href: String,
    /// Opens in a new tab instead of routing inside the site.
    #[serde(default)]
    pub external: bool,
}

/// Landing page copy.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HomeContent {
    pub greeting: String,
    pub headline: String,
    pub intro: String,
    #[serde(default)]
    pub links: Vec<SiteLink>,
}

/// One sidebar entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SidebarRoute {
    pub path: String,
    pub label: String,
    /// Semantic icon name, see `components::icons::route_icon`.
    #[serde(default)]
    pub icon: Option<String>,
    /// Body text for the route's page.
    #[serde(default)]
    pub summary: String,
}

impl SidebarRoute {
    pub fn is_home(&self) -> bool {
        self.path == "/"
    }
}

/// Parsed and validated site content.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub brand: Brand,
    pub home: HomeContent,
    pub routes: Vec<SidebarRoute>,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The content bundled into the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse(SITE_TOML)
    }

    /// Look up a route by its path.
    pub fn route(&self, path: &str) -> Option<&SidebarRoute> {
        self.routes.iter().find(|r| r.path == path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.routes.is_empty() {
            return Err(ConfigError::NoRoutes);
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(ConfigError::InvalidRoutePath(route.path.clone()));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(ConfigError::DuplicateRoute(route.path.clone()));
            }
        }

        if !self.routes.iter().any(SidebarRoute::is_home) {
            return Err(ConfigError::MissingHome);
        }
        Ok(())
    }
}
