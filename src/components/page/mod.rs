//! Content pages for non-home routes.

use leptos::prelude::*;

use crate::core::SidebarRoute;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/page/page.module.css");

/// Page for a configured route: its label as heading, summary as body.
#[component]
pub fn ContentPage(route: SidebarRoute) -> impl IntoView {
    view! {
        <article class=css::page>
            <h2 class=css::title>{route.label}</h2>
            <p class=css::body>{route.summary}</p>
        </article>
    }
}

/// Shown for hashes that match no configured route.
#[component]
pub fn NotFound(route: AppRoute) -> impl IntoView {
    view! {
        <article class=css::page>
            <h2 class=css::title>"Not found"</h2>
            <p class=css::body>
                "Nothing lives at " <code>{route.path().to_string()}</code> ". "
                <a href=AppRoute::home().to_hash()>"Back home"</a>
            </p>
        </article>
    }
}
