//! Application router and page layout.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current page is derived from `#/path`
//! - **Sidebar never re-renders on navigation**: only the page area swaps
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::ev;
use leptos::prelude::*;
use leptos_use::use_event_listener;

use crate::app::AppContext;
use crate::components::home::Home;
use crate::components::page::{ContentPage, NotFound};
use crate::components::sidebar::{OpenSidebarButton, Sidebar};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Route structure:
/// - `#/` → landing page
/// - `#/<path>` → content page of the configured route with that path
/// - anything else → not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    let _ = use_event_listener(window(), ev::hashchange, move |_| {
        let next = AppRoute::current();
        log::debug!("navigate: {}", next.path());
        route.set(next);
    });

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <div class=css::layout>
            <Sidebar route=route_memo />

            <main class=css::main>
                <header class=css::header>
                    <OpenSidebarButton />
                </header>
                <div class=css::content>
                    <RoutedPage route=route_memo />
                </div>
            </main>
        </div>
    }
}

// ============================================================================
// Page Selection
// ============================================================================

/// Render the page for the current route.
#[component]
fn RoutedPage(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        let current = route.get();
        if current.is_home() {
            return view! { <Home /> }.into_any();
        }

        match ctx.site.with_value(|site| site.route(current.path()).cloned()) {
            Some(configured) => view! { <ContentPage route=configured /> }.into_any(),
            None => view! { <NotFound route=current /> }.into_any(),
        }
    }
}
