//! Buttons that open and close the sidebar.
//!
//! They only write the shared open flag; the sidebar reacts on its own.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sidebar/buttons.module.css");

/// Close button rendered inside the sidebar on narrow viewports.
#[component]
pub fn CloseSidebarButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::iconButton
            on:click=move |_| ctx.sidebar.close()
            title="Close menu"
            aria-label="Close menu"
        >
            <Icon icon=ic::CLOSE />
        </button>
    }
}

/// Menu button rendered in the page header; hidden by CSS on wide viewports.
#[component]
pub fn OpenSidebarButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=format!("{} {}", css::iconButton, css::menuButton)
            on:click=move |_| ctx.sidebar.open()
            title="Open menu"
            aria-label="Open menu"
        >
            <Icon icon=ic::MENU />
        </button>
    }
}
