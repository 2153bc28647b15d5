//! A single sidebar navigation entry.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::core::SidebarRoute;
use crate::models::{AppRoute, href_for};

stylance::import_crate_style!(css, "src/components/sidebar/route_link.module.css");

/// Link to one configured route, highlighted while it is the current page.
#[component]
pub fn SidebarRouteLink(route: SidebarRoute, current: Memo<AppRoute>) -> impl IntoView {
    let icon = icons::route_icon(route.icon.as_deref());
    let href = href_for(&route.path);
    let path = route.path.clone();
    let is_active = Memo::new(move |_| current.with(|r| r.path() == path));

    view! {
        <a
            href=href
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::link, css::active)
                } else {
                    css::link.to_string()
                }
            }
            aria-current=move || is_active.get().then_some("page")
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{route.label}</span>
        </a>
    }
}
