//! Root application module.
//!
//! Contains the main App component, AppContext definition, SidebarState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::{FirstLoadMarker, OpenState, SiteConfig};

// ============================================================================
// SidebarState
// ============================================================================

/// Open/closed flag of the sidebar, shared by everything that shows or hides it.
///
/// Starts closed. On wide viewports the sidebar is docked and visible
/// whatever this flag says, so only narrow viewports observe the default.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct SidebarState {
    open: RwSignal<bool>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    /// Reactive read, tracked by the surrounding effect or view.
    pub fn get(&self) -> bool {
        self.open.get()
    }

    pub fn open(&self) {
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenState for SidebarState {
    /// Untracked read; used from event handlers.
    fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone)]
pub struct AppContext {
    /// Sidebar open/closed state.
    pub sidebar: SidebarState,

    /// Set once the sidebar's first viewport evaluation has happened.
    pub first_load: FirstLoadMarker,

    /// Bundled site content.
    pub site: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            sidebar: SidebarState::new(),
            first_load: FirstLoadMarker::new(),
            site: StoredValue::new(site),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the bundled site content
/// - Creates and provides the global AppContext
/// - Falls back to an error page when the content is invalid
#[component]
pub fn App() -> impl IntoView {
    let site = SiteConfig::bundled();
    match &site {
        Ok(config) => log::info!("loaded site config with {} routes", config.routes.len()),
        Err(e) => log::error!("{}", e),
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1e1e1e;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a0a0a0;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {site.map(|config| {
                provide_context(AppContext::new(config));
                view! { <AppRouter /> }
            })}
        </ErrorBoundary>
    }
}
